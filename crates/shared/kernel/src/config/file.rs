use super::{ConfigError, ConfigErrorExt, parse_loader_options, parse_select_props};
use config::{Config, Environment, File};
use serde_json::{Map, Value};
use std::path::Path;
use szn_domain::loader::{LoaderOptions, UrlKey};
use szn_domain::props::SelectProps;
use tracing::{debug, info};

const ENV_PREFIX: &str = "SZN";
const ENV_SEPARATOR: &str = "__";

const LOADER_OPTIONS_KEY: &str = "loaderOptions";
const URLS_KEY: &str = "urls";

/// Snake-case spellings of the schema's camelCase keys. Environment variables can only
/// express these, and files may use either.
const KEY_ALIASES: [(&str, &str); 7] = [
    ("use_embedded_loader", "useEmbeddedLoader"),
    ("use_async_loading", "useAsyncLoading"),
    ("aria_label", "ariaLabel"),
    ("min_bottom_space", "minBottomSpace"),
    ("dropdown_class_name", "dropdownClassName"),
    ("dropdown_container", "dropdownContainer"),
    ("loader_options", LOADER_OPTIONS_KEY),
];

/// Loads loader options from a file, overlaid with `SZN__`-prefixed environment variables
/// (`SZN__USE_ASYNC_LOADING=false`, `SZN__URLS__PACKAGE=https://...`).
///
/// Each source is read into a type-preserving tree and its keys are rewritten to their
/// canonical spelling; environment values then replace file values key by key. An
/// environment value like `yes` stays a string and is rejected where a boolean is expected.
///
/// # Errors
/// * [`ConfigError::Source`] if the file is missing or a source cannot be parsed.
/// * [`ConfigError::Schema`] if the merged result violates the schema.
///
/// # Example
/// ```rust,no_run
/// use szn_kernel::config::load_loader_options;
///
/// let options = load_loader_options("config/loader.toml").unwrap_or_default();
/// println!("embedded loader: {}", options.use_embedded_loader);
/// ```
pub fn load_loader_options(path: impl AsRef<Path>) -> Result<LoaderOptions, ConfigError> {
    parse_loader_options(&load_layered(path.as_ref(), environment())?)
}

/// Same layering as [`load_loader_options`], for the full component props.
///
/// # Errors
/// See [`load_loader_options`].
pub fn load_select_props(path: impl AsRef<Path>) -> Result<SelectProps, ConfigError> {
    parse_select_props(&load_layered(path.as_ref(), environment())?)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true)
}

fn load_layered(path: &Path, environment: Environment) -> Result<Value, ConfigError> {
    info!("Loading configuration from {}", path.display());

    let file = Config::builder()
        .add_source(File::from(path).required(true))
        .build()
        .context("Failed to read configuration file")?
        .try_deserialize::<Value>()
        .context("Failed to read configuration file")?;

    let env = Config::builder()
        .add_source(environment)
        .build()
        .context("Failed to read environment overrides")?
        .try_deserialize::<Value>()
        .context("Failed to read environment overrides")?;

    let mut merged = canonicalize(file);
    overlay(&mut merged, canonicalize(env));
    Ok(merged)
}

/// Rewrites alias keys to their canonical spelling, descending into `loaderOptions` and
/// `urls`. A key spelled both ways in one source is left duplicated for the schema to reject.
fn canonicalize(value: Value) -> Value {
    let Value::Object(entries) = value else {
        return value;
    };

    let mut entries = rename_keys(entries, |key| {
        KEY_ALIASES.iter().find(|(alias, _)| *alias == key).map(|(_, canonical)| *canonical)
    });
    if let Some(options) = entries.remove(LOADER_OPTIONS_KEY) {
        entries.insert(LOADER_OPTIONS_KEY.to_owned(), canonicalize(options));
    }
    match entries.remove(URLS_KEY) {
        Some(Value::Object(urls)) => {
            let urls = rename_keys(urls, |key| {
                UrlKey::ALL.into_iter().find(|url| url_alias(*url) == Some(key)).map(UrlKey::as_str)
            });
            entries.insert(URLS_KEY.to_owned(), Value::Object(urls));
        },
        Some(other) => {
            entries.insert(URLS_KEY.to_owned(), other);
        },
        None => {},
    }
    Value::Object(entries)
}

fn rename_keys(entries: Map<String, Value>, canonical: impl Fn(&str) -> Option<&'static str>) -> Map<String, Value> {
    let mut renamed = Map::with_capacity(entries.len());
    let mut aliased = Vec::new();

    for (key, value) in entries {
        match canonical(&key) {
            Some(name) => aliased.push((key, name, value)),
            None => {
                renamed.insert(key, value);
            },
        }
    }
    for (alias, name, value) in aliased {
        if renamed.contains_key(name) {
            // Spelled both ways: keep both so the schema reports the duplicate.
            debug!(key = %alias, "Configuration key spelled twice");
            renamed.insert(alias, value);
        } else {
            renamed.insert(name.to_owned(), value);
        }
    }
    renamed
}

/// Environment-friendly spelling of URL keys containing `.` or `-`.
const fn url_alias(key: UrlKey) -> Option<&'static str> {
    match key {
        UrlKey::BundleElementsEs3 => Some("bundle_elements_es3"),
        UrlKey::BundleElementsEs2016 => Some("bundle_elements_es2016"),
        UrlKey::BundleFullEs3 => Some("bundle_full_es3"),
        UrlKey::BundleFullEs2016 => Some("bundle_full_es2016"),
        UrlKey::BundleFullCe => Some("bundle_full_ce"),
        UrlKey::Package | UrlKey::Loader | UrlKey::Es3 | UrlKey::Es2016 => None,
    }
}

/// Deep-merges `top` over `base`; objects merge key by key, anything else replaces.
fn overlay(base: &mut Value, top: Value) {
    match (base, top) {
        (_, Value::Null) => {},
        (Value::Object(base), Value::Object(top)) => {
            for (key, value) in top {
                match base.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        base.insert(key, value);
                    },
                }
            }
        },
        (base, top) => *base = top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: config::Map<String, String> =
            vars.iter().map(|(name, value)| ((*name).to_owned(), (*value).to_owned())).collect();
        environment().source(Some(vars))
    }

    fn write(name: &str, contents: &str) -> Result<(TempDir, std::path::PathBuf), std::io::Error> {
        let dir = tempdir()?;
        let path = dir.path().join(name);
        fs::write(&path, contents)?;
        Ok((dir, path))
    }

    #[test]
    fn loads_snake_case_toml() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write(
            "loader.toml",
            "enable = true\nuse_async_loading = false\n\n[urls]\npackage = \"https://cdn.example/szn\"\n",
        )?;

        let options = parse_loader_options(&load_layered(&path, env(&[]))?)?;
        assert!(options.enable);
        assert!(!options.use_async_loading);
        assert!(!options.use_embedded_loader);
        assert_eq!(options.urls.get(UrlKey::Package), Some("https://cdn.example/szn"));
        Ok(())
    }

    #[test]
    fn environment_overrides_camel_case_file_keys() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.json", r#"{ "useAsyncLoading": false, "useEmbeddedLoader": false }"#)?;

        let raw = load_layered(&path, env(&[("SZN__USE_ASYNC_LOADING", "true"), ("SZN__USE_EMBEDDED_LOADER", "true")]))?;
        let options = parse_loader_options(&raw)?;

        assert!(options.use_async_loading);
        assert!(options.use_embedded_loader);
        Ok(())
    }

    #[test]
    fn environment_overrides_nested_loader_options() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("select.toml", "name = \"country\"\n\n[loaderOptions]\nuseEmbeddedLoader = false\n")?;

        let raw = load_layered(&path, env(&[("SZN__LOADER_OPTIONS__USE_EMBEDDED_LOADER", "true")]))?;
        let props = parse_select_props(&raw)?;

        assert_eq!(props.name.as_deref(), Some("country"));
        assert!(props.loader_options.use_embedded_loader);
        Ok(())
    }

    #[test]
    fn environment_url_keys_map_to_canonical_names() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.toml", "[urls]\npackage = \"https://cdn.example/szn\"\n")?;

        let raw = load_layered(&path, env(&[("SZN__URLS__BUNDLE_FULL_ES3", "https://cdn.example/full.es3.js")]))?;
        let options = parse_loader_options(&raw)?;

        assert_eq!(options.urls.get(UrlKey::BundleFullEs3), Some("https://cdn.example/full.es3.js"));
        assert_eq!(options.urls.get(UrlKey::Package), Some("https://cdn.example/szn"));
        Ok(())
    }

    #[test]
    fn environment_string_flag_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.toml", "enable = true\n")?;

        let raw = load_layered(&path, env(&[("SZN__USE_ASYNC_LOADING", "yes")]))?;
        assert!(matches!(parse_loader_options(&raw), Err(ConfigError::Schema { .. })));
        Ok(())
    }

    #[test]
    fn key_spelled_twice_in_one_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.json", r#"{ "useAsyncLoading": false, "use_async_loading": true }"#)?;

        let raw = load_layered(&path, env(&[]))?;
        assert!(matches!(parse_loader_options(&raw), Err(ConfigError::Schema { .. })));
        Ok(())
    }

    #[test]
    fn string_flag_in_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.toml", "use_async_loading = \"yes\"\n")?;

        let err = parse_loader_options(&load_layered(&path, env(&[]))?).expect_err("string flag must be rejected");
        assert!(matches!(err, ConfigError::Schema { .. }));
        Ok(())
    }

    #[test]
    fn unknown_url_key_in_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write("loader.toml", "[urls]\nbogus = \"https://cdn.example/\"\n")?;

        assert!(matches!(parse_loader_options(&load_layered(&path, env(&[]))?), Err(ConfigError::Schema { .. })));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let err = load_loader_options("does/not/exist.toml").expect_err("missing file");
        assert!(matches!(err, ConfigError::Source { .. }));
    }

    #[test]
    fn loads_props_with_nested_loader_options() -> Result<(), Box<dyn std::error::Error>> {
        let (_dir, path) = write(
            "select.toml",
            "name = \"country\"\nmultiple = true\naria_label = \"Country\"\n\n[loader_options]\nenable = false\n",
        )?;

        let props = parse_select_props(&load_layered(&path, env(&[]))?)?;
        assert_eq!(props.name.as_deref(), Some("country"));
        assert!(props.multiple);
        assert_eq!(props.aria_label.as_deref(), Some("Country"));
        assert!(!props.loader_options.enable);
        Ok(())
    }
}
