/// Tag name of the custom element.
pub const ELEMENT_TAG: &str = "szn-select";

/// Event emitted by the element when it is ready or wants different root attributes.
pub const READY_EVENT: &str = "szn-select:ready";

/// Marker attribute of the `<span>` the element renders its UI into.
pub const UI_CONTAINER_ATTRIBUTE: &str = "data-szn-select--ui";

/// Prefix of the data attributes carrying resource URLs on the remote loader script.
pub const LOADER_URL_ATTRIBUTE_PREFIX: &str = "data-szn-select--loader-urls--";

/// File name of the loader, relative to the package URL.
pub const LOADER_FILE_NAME: &str = "loader.min.js";

/// Global factory defined by the embeddable loader payload.
pub const BUNDLE_FACTORY: &str = "makeSznSelectBundleScript";

/// Package URL used when no `package` override is configured.
/// The version range follows the major version of this workspace.
pub const DEFAULT_PACKAGE_URL: &str =
    concat!("https://unpkg.com/@jurca/szn-select@", env!("CARGO_PKG_VERSION_MAJOR"), ".x/");
