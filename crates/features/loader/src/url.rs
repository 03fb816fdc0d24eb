//! Resolution of per-resource URLs.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use szn_domain::constants::{LOADER_FILE_NAME, LOADER_URL_ATTRIBUTE_PREFIX};
use szn_domain::loader::{UrlKey, UrlOverrides};

/// URL overrides merged over the defaults.
///
/// `package` is always present and always ends with exactly one added `/` if it lacked one.
/// Other keys are present only when overridden; consumers derive the rest from `package`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveUrls {
    package: String,
    overrides: BTreeMap<UrlKey, String>,
}

/// Merges `overrides` over `default_package_url`.
#[must_use]
pub fn resolve_urls(overrides: &UrlOverrides, default_package_url: &str) -> EffectiveUrls {
    let package = normalize_package(overrides.get(UrlKey::Package).unwrap_or(default_package_url));
    let overrides = overrides
        .iter()
        .filter(|(key, _)| *key != UrlKey::Package)
        .map(|(key, url)| (key, url.to_owned()))
        .collect();

    EffectiveUrls { package, overrides }
}

fn normalize_package(url: &str) -> String {
    if url.ends_with('/') { url.to_owned() } else { format!("{url}/") }
}

/// Name of the loader-script data attribute carrying `key`'s URL.
#[must_use]
pub fn data_attribute_name(key: UrlKey) -> String {
    format!("{LOADER_URL_ATTRIBUTE_PREFIX}{}", key.as_str().replace('.', "-"))
}

impl EffectiveUrls {
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Resolved URL of `key`, if known.
    #[must_use]
    pub fn get(&self, key: UrlKey) -> Option<&str> {
        match key {
            UrlKey::Package => Some(&self.package),
            _ => self.overrides.get(&key).map(String::as_str),
        }
    }

    /// The loader override, or the loader file inside the package.
    #[must_use]
    pub fn loader_url(&self) -> String {
        self.get(UrlKey::Loader)
            .map_or_else(|| format!("{}{LOADER_FILE_NAME}", self.package), ToOwned::to_owned)
    }

    /// Every resolved entry, `package` first.
    pub fn iter(&self) -> impl Iterator<Item = (UrlKey, &str)> {
        std::iter::once((UrlKey::Package, self.package.as_str()))
            .chain(self.overrides.iter().map(|(key, url)| (*key, url.as_str())))
    }

    /// Data attributes announcing the resolved URLs to the remote loader.
    pub fn data_attributes(&self) -> impl Iterator<Item = (String, &str)> {
        self.iter().map(|(key, url)| (data_attribute_name(key), url))
    }
}

impl Serialize for EffectiveUrls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.overrides.len() + 1))?;
        for (key, url) in self.iter() {
            map.serialize_entry(key.as_str(), url)?;
        }
        map.end()
    }
}
