use std::sync::Arc;
use szn_dom::MemoryDocument;
use szn_domain::loader::{LoaderOptions, UrlKey};
use szn_domain::script::ScriptSource;
use szn_loader::{BootstrapOutcome, EmbeddedLoader, LoadLatch, LoaderBootstrapper, LoaderError};

const PACKAGE: &str = "https://unpkg.com/@jurca/szn-select@1.x/";

fn bootstrapper(document: &Arc<MemoryDocument>, latch: &LoadLatch) -> LoaderBootstrapper<Arc<MemoryDocument>> {
    LoaderBootstrapper::builder()
        .document(Arc::clone(document))
        .latch(latch.clone())
        .default_package_url(PACKAGE)
        .build()
}

#[test]
fn remote_loader_is_injected_once_for_many_mounts() {
    let document = Arc::new(MemoryDocument::new());
    let latch = LoadLatch::new();

    let outcomes: Vec<_> = (0..5)
        .map(|_| bootstrapper(&document, &latch).bootstrap(&LoaderOptions::default()).expect("bootstrap"))
        .collect();

    assert_eq!(outcomes[0], BootstrapOutcome::Remote { src: format!("{PACKAGE}loader.min.js") });
    assert!(outcomes[1..].iter().all(|o| *o == BootstrapOutcome::AlreadyStarted));
    assert_eq!(document.script_count(), 1);
}

#[test]
fn concurrent_mounts_inject_once() {
    let document = Arc::new(MemoryDocument::new());
    let latch = LoadLatch::new();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let bootstrapper = bootstrapper(&document, &latch);
            scope.spawn(move || bootstrapper.bootstrap(&LoaderOptions::default()).expect("bootstrap"));
        }
    });

    assert_eq!(document.script_count(), 1);
}

#[test]
fn remote_script_carries_url_attributes() {
    let document = Arc::new(MemoryDocument::new());
    let options = LoaderOptions::default()
        .asynchronous(false)
        .with_url(UrlKey::Package, "https://cdn.example/szn-select")
        .with_url(UrlKey::BundleFullCe, "https://cdn.example/ce.js");

    bootstrapper(&document, &LoadLatch::new()).bootstrap(&options).expect("bootstrap");

    let scripts = document.scripts();
    let script = &scripts[0];
    assert!(!script.asynchronous);
    assert_eq!(script.src(), Some("https://cdn.example/szn-select/loader.min.js"));
    assert_eq!(
        script.attribute("data-szn-select--loader-urls--package"),
        Some("https://cdn.example/szn-select/")
    );
    assert_eq!(
        script.attribute("data-szn-select--loader-urls--bundle-full-ce"),
        Some("https://cdn.example/ce.js")
    );
    assert_eq!(script.attributes.len(), 2);
}

#[test]
fn remote_script_is_async_by_default() {
    let document = Arc::new(MemoryDocument::new());
    bootstrapper(&document, &LoadLatch::new()).bootstrap(&LoaderOptions::default()).expect("bootstrap");
    assert!(document.scripts()[0].asynchronous);
}

#[test]
fn embedded_loader_is_inlined() {
    let document = Arc::new(MemoryDocument::new());
    let bootstrapper = LoaderBootstrapper::builder()
        .document(Arc::clone(&document))
        .latch(LoadLatch::new())
        .default_package_url("https://cdn.example/szn")
        .embedded_loader(EmbeddedLoader::new("var payload = 1;"))
        .build();

    let outcome = bootstrapper.bootstrap(&LoaderOptions::default().embedded(true)).expect("bootstrap");
    assert_eq!(outcome, BootstrapOutcome::Embedded);

    let scripts = document.scripts();
    let ScriptSource::Inline(body) = &scripts[0].source else {
        panic!("expected an inline script, got {:?}", scripts[0].source);
    };
    assert!(body.starts_with("var payload = 1;"));
    assert!(body.contains(r#"makeSznSelectBundleScript({"package":"https://cdn.example/szn/"}, true)"#));
}

#[test]
fn disabled_loading_never_injects_and_still_takes_the_latch() {
    let document = Arc::new(MemoryDocument::new());
    let latch = LoadLatch::new();

    let first = bootstrapper(&document, &latch).bootstrap(&LoaderOptions::disabled()).expect("bootstrap");
    let second = bootstrapper(&document, &latch).bootstrap(&LoaderOptions::default()).expect("bootstrap");

    assert_eq!(first, BootstrapOutcome::Disabled);
    assert_eq!(second, BootstrapOutcome::AlreadyStarted);
    assert!(latch.is_started());
    assert_eq!(document.script_count(), 0);
}

#[test]
fn rejected_injection_is_reported_and_not_retried() {
    let document = Arc::new(MemoryDocument::rejecting());
    let latch = LoadLatch::new();

    let err = bootstrapper(&document, &latch).bootstrap(&LoaderOptions::default()).expect_err("rejected");
    assert!(matches!(err, LoaderError::Host { .. }));
    assert!(err.to_string().contains("Failed to inject remote loader"));

    let retry = bootstrapper(&document, &latch).bootstrap(&LoaderOptions::default()).expect("bootstrap");
    assert_eq!(retry, BootstrapOutcome::AlreadyStarted);
}
