use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// Closed set of resources whose URL can be overridden.
///
/// The canonical names (`bundle-full.es3`, ...) are what the element's loader reads.
/// Snake-case aliases exist for configuration sources that cannot express dots or
/// dashes in keys (TOML bare keys, environment variables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrlKey {
    #[serde(rename = "package")]
    Package,
    #[serde(rename = "loader")]
    Loader,
    #[serde(rename = "es3")]
    Es3,
    #[serde(rename = "es2016")]
    Es2016,
    #[serde(rename = "bundle-elements.es3", alias = "bundle_elements_es3")]
    BundleElementsEs3,
    #[serde(rename = "bundle-elements.es2016", alias = "bundle_elements_es2016")]
    BundleElementsEs2016,
    #[serde(rename = "bundle-full.es3", alias = "bundle_full_es3")]
    BundleFullEs3,
    #[serde(rename = "bundle-full.es2016", alias = "bundle_full_es2016")]
    BundleFullEs2016,
    #[serde(rename = "bundle-full.ce", alias = "bundle_full_ce")]
    BundleFullCe,
}

impl UrlKey {
    pub const ALL: [Self; 9] = [
        Self::Package,
        Self::Loader,
        Self::Es3,
        Self::Es2016,
        Self::BundleElementsEs3,
        Self::BundleElementsEs2016,
        Self::BundleFullEs3,
        Self::BundleFullEs2016,
        Self::BundleFullCe,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Loader => "loader",
            Self::Es3 => "es3",
            Self::Es2016 => "es2016",
            Self::BundleElementsEs3 => "bundle-elements.es3",
            Self::BundleElementsEs2016 => "bundle-elements.es2016",
            Self::BundleFullEs3 => "bundle-full.es3",
            Self::BundleFullEs2016 => "bundle-full.es2016",
            Self::BundleFullCe => "bundle-full.ce",
        }
    }
}

impl fmt::Display for UrlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-resource URL overrides, keyed by the closed [`UrlKey`] set.
///
/// A key given twice, under its canonical name and an alias, is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlOverrides(BTreeMap<UrlKey, String>);

impl<'de> Deserialize<'de> for UrlOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OverridesVisitor;

        impl<'de> Visitor<'de> for OverridesVisitor {
            type Value = UrlOverrides;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of resource keys to URL strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut urls = BTreeMap::new();
                while let Some((key, url)) = map.next_entry::<UrlKey, String>()? {
                    match urls.entry(key) {
                        Entry::Occupied(_) => {
                            return Err(de::Error::custom(format_args!("duplicate url key `{key}`")));
                        },
                        Entry::Vacant(slot) => {
                            slot.insert(url);
                        },
                    }
                }
                Ok(UrlOverrides(urls))
            }
        }

        deserializer.deserialize_map(OverridesVisitor)
    }
}

impl UrlOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: UrlKey, url: impl Into<String>) -> Self {
        self.0.insert(key, url.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: UrlKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UrlKey, &str)> {
        self.0.iter().map(|(key, url)| (*key, url.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(UrlKey, String)> for UrlOverrides {
    fn from_iter<I: IntoIterator<Item = (UrlKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How (and whether) the element implementation gets onto the page.
///
/// Unknown keys and values of the wrong kind are rejected during deserialization;
/// a configuration is either valid as a whole or not applied at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoaderOptions {
    #[serde(default = "enabled")]
    pub enable: bool,
    #[serde(default, alias = "use_embedded_loader")]
    pub use_embedded_loader: bool,
    #[serde(default = "enabled", alias = "use_async_loading")]
    pub use_async_loading: bool,
    #[serde(default)]
    pub urls: UrlOverrides,
}

const fn enabled() -> bool {
    true
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            enable: true,
            use_embedded_loader: false,
            use_async_loading: true,
            urls: UrlOverrides::default(),
        }
    }
}

impl LoaderOptions {
    /// Options that never load anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self { enable: false, ..Self::default() }
    }

    #[must_use]
    pub const fn embedded(mut self, enabled: bool) -> Self {
        self.use_embedded_loader = enabled;
        self
    }

    #[must_use]
    pub const fn asynchronous(mut self, enabled: bool) -> Self {
        self.use_async_loading = enabled;
        self
    }

    #[must_use]
    pub fn with_url(mut self, key: UrlKey, url: impl Into<String>) -> Self {
        self.urls = self.urls.with(key, url);
        self
    }
}
