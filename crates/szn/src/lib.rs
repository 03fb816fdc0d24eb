//! Facade crate for the szn-select bridge.
//! Re-exports the domain, kernel, loader, component and host crates.
//! Keep this crate thin: it composes the other crates and implements nothing itself.
//!
//! ## Usage
//! - Add `szn`, with the `web` feature when running in a browser.
//! - Validate component props with [`kernel::config::parse_select_props`].
//! - Build one [`loader::LoaderBootstrapper`] per page and mount a [`component::SznSelect`]
//!   per `<szn-select>` node.

pub use szn_component as component;
pub use szn_dom as dom;
pub use szn_domain as domain;
pub use szn_kernel as kernel;
pub use szn_loader as loader;

/// Build-time enabled host features.
pub mod features {
    pub const ENABLED: &[&str] = &[
        "memory",
        #[cfg(feature = "web")]
        "web",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// The types most integrations need.
pub mod prelude {
    pub use szn_component::{ComponentError, Markup, SznSelect};
    pub use szn_domain::attributes::{EffectiveAttributes, RequestedAttributes};
    pub use szn_domain::loader::{LoaderOptions, UrlKey, UrlOverrides};
    pub use szn_domain::props::SelectProps;
    pub use szn_kernel::config::{ConfigError, parse_loader_options, parse_select_props};
    pub use szn_kernel::host::{HostDocument, HostElement, RenderScheduler};
    pub use szn_loader::{BootstrapOutcome, LoadLatch, LoaderBootstrapper};
}
