use serde_json::json;
use szn_domain::props::{PropertyValue, SelectProperty, SelectProps};

#[test]
fn props_deserialize_from_component_bindings() {
    let props: SelectProps = serde_json::from_value(json!({
        "name": "country",
        "multiple": true,
        "ariaLabel": "Country",
        "minBottomSpace": 160,
        "loaderOptions": { "enable": false }
    }))
    .expect("props deserialize");

    assert_eq!(props.name.as_deref(), Some("country"));
    assert!(props.multiple);
    assert!(!props.disabled);
    assert_eq!(props.aria_label.as_deref(), Some("Country"));
    assert!(!props.loader_options.enable);
    assert_eq!(props.property(SelectProperty::MinBottomSpace), PropertyValue::Number(160.0));
    assert_eq!(props.property(SelectProperty::DropdownContainer), PropertyValue::Unset);
}

#[test]
fn invalid_nested_loader_options_reject_the_props() {
    let result = serde_json::from_value::<SelectProps>(json!({
        "name": "country",
        "loaderOptions": { "urls": { "bogusKey": "x" } }
    }));
    assert!(result.is_err());
}

#[test]
fn property_names_match_element_api() {
    let names: Vec<&str> = SelectProperty::ALL.iter().map(|p| p.js_name()).collect();
    assert_eq!(names, ["minBottomSpace", "dropdownClassName", "dropdownContainer"]);
}
