use serde_json::json;
use std::rc::Rc;
use szn::dom::{CountingScheduler, MemoryDocument, MemoryElement};
use szn::kernel::signal::requested_attributes_from_detail;
use szn::prelude::*;

#[test]
fn configured_component_loads_once_and_follows_the_element() {
    let props = parse_select_props(&json!({
        "name": "country",
        "ariaLabel": "Country",
        "dropdownClassName": "wide",
        "loaderOptions": { "useAsyncLoading": false, "urls": { "package": "https://cdn.example/szn" } }
    }))
    .expect("valid props");

    let document = Rc::new(MemoryDocument::new());
    let loader = LoaderBootstrapper::builder().document(Rc::clone(&document)).latch(LoadLatch::new()).build();
    let scheduler = Rc::new(CountingScheduler::new());

    let first_element = Rc::new(MemoryElement::new());
    let second_element = Rc::new(MemoryElement::new());
    let first = SznSelect::new(props.clone(), Rc::clone(&first_element), scheduler.clone());
    let second = SznSelect::new(props, Rc::clone(&second_element), scheduler.clone());

    assert_eq!(
        first.mount(&loader).expect("mount"),
        BootstrapOutcome::Remote { src: "https://cdn.example/szn/loader.min.js".into() }
    );
    assert_eq!(second.mount(&loader).expect("mount"), BootstrapOutcome::AlreadyStarted);
    assert_eq!(document.script_count(), 1);
    assert!(!document.scripts()[0].asynchronous);

    let detail = json!({ "attributes": { "data-szn-select--state": "open", "aria-hidden": null } });
    first_element.dispatch_ready(requested_attributes_from_detail(&detail).expect("attributes"));

    assert_eq!(first.attributes().get("data-szn-select--state"), Some("open"));
    assert!(second.attributes().is_empty());
    assert!(first.render(Vec::new()).to_html().contains(r#"aria-label="Country""#));
    assert_eq!(scheduler.renders(), 1);
}

#[test]
fn invalid_configuration_is_rejected_before_anything_mounts() {
    let err = parse_select_props(&json!({ "loaderOptions": { "urls": { "bogusKey": "x" } } })).expect_err("rejected");
    assert!(matches!(err, ConfigError::Schema { .. }));
}

#[test]
fn memory_host_is_always_available() {
    assert!(szn::features::is_enabled("memory"));
    assert_eq!(szn::features::is_enabled("web"), cfg!(feature = "web"));
}
