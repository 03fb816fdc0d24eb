use serde_json::json;
use szn_domain::loader::{LoaderOptions, UrlKey};

#[test]
fn defaults_enable_remote_async_loading() {
    let options = LoaderOptions::default();
    assert!(options.enable);
    assert!(!options.use_embedded_loader);
    assert!(options.use_async_loading);
    assert!(options.urls.is_empty());

    let parsed: LoaderOptions = serde_json::from_value(json!({})).expect("empty object is valid");
    assert_eq!(parsed, options);
}

#[test]
fn camel_case_and_snake_case_keys_deserialize() {
    let camel: LoaderOptions = serde_json::from_value(json!({
        "useEmbeddedLoader": true,
        "useAsyncLoading": false,
        "urls": { "package": "https://cdn.example/szn", "bundle-full.ce": "https://cdn.example/ce.js" }
    }))
    .expect("camelCase options");

    let snake: LoaderOptions = serde_json::from_value(json!({
        "use_embedded_loader": true,
        "use_async_loading": false,
        "urls": { "package": "https://cdn.example/szn", "bundle_full_ce": "https://cdn.example/ce.js" }
    }))
    .expect("snake_case options");

    assert_eq!(camel, snake);
    assert_eq!(camel.urls.get(UrlKey::BundleFullCe), Some("https://cdn.example/ce.js"));
}

#[test]
fn unknown_url_key_is_rejected() {
    let result = serde_json::from_value::<LoaderOptions>(json!({ "urls": { "bogusKey": "x" } }));
    assert!(result.is_err());
}

#[test]
fn non_boolean_flag_is_rejected() {
    assert!(serde_json::from_value::<LoaderOptions>(json!({ "useAsyncLoading": "yes" })).is_err());
    assert!(serde_json::from_value::<LoaderOptions>(json!({ "enable": 1 })).is_err());
    assert!(serde_json::from_value::<LoaderOptions>(json!({ "useEmbeddedLoader": null })).is_err());
}

#[test]
fn non_string_url_is_rejected() {
    assert!(serde_json::from_value::<LoaderOptions>(json!({ "urls": { "loader": 42 } })).is_err());
}

#[test]
fn unknown_option_key_is_rejected() {
    assert!(serde_json::from_value::<LoaderOptions>(json!({ "lazy": true })).is_err());
}

#[test]
fn url_key_names_match_loader_contract() {
    let names: Vec<&str> = UrlKey::ALL.iter().map(|key| key.as_str()).collect();
    assert_eq!(
        names,
        [
            "package",
            "loader",
            "es3",
            "es2016",
            "bundle-elements.es3",
            "bundle-elements.es2016",
            "bundle-full.es3",
            "bundle-full.es2016",
            "bundle-full.ce",
        ]
    );
}

#[test]
fn url_key_given_under_two_spellings_is_rejected() {
    let err = serde_json::from_value::<LoaderOptions>(json!({
        "urls": { "bundle-full.es3": "https://a.example/", "bundle_full_es3": "https://b.example/" }
    }))
    .expect_err("duplicate url key");
    assert!(err.to_string().contains("duplicate url key `bundle-full.es3`"), "{err}");
}
