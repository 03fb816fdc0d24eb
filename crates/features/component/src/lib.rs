//! # Component
//!
//! The component side of the bridge.
//!
//! * [`AttributeReconciler`] keeps the root attributes the element asked for.
//! * [`render`] produces the wrapper markup.
//! * [`SznSelect`] ties both to the host element lifecycle and bootstraps the loader on mount.
//!
//! ```rust
//! use std::rc::Rc;
//! use szn_component::SznSelect;
//! use szn_dom::{CountingScheduler, MemoryDocument, MemoryElement};
//! use szn_domain::attributes::RequestedAttributes;
//! use szn_domain::props::SelectProps;
//! use szn_loader::{LoadLatch, LoaderBootstrapper};
//!
//! let loader = LoaderBootstrapper::builder().document(MemoryDocument::new()).latch(LoadLatch::new()).build();
//! let element = Rc::new(MemoryElement::new());
//! let select = SznSelect::new(SelectProps::new(), Rc::clone(&element), Rc::new(CountingScheduler::new()));
//!
//! select.mount(&loader).unwrap();
//! element.dispatch_ready(RequestedAttributes::new().set("data-szn-select--state", "closed"));
//! assert_eq!(select.attributes().get("data-szn-select--state"), Some("closed"));
//! ```

mod component;
mod error;
mod reconciler;
pub mod render;

pub use component::SznSelect;
pub use error::{ComponentError, ComponentErrorExt};
pub use reconciler::{AttributeReconciler, effective_attributes};
pub use render::{Element, Markup, is_valid_attribute_name, render};
