//! Seams between the bridge and the page it runs in.
//!
//! The bridge never touches a DOM directly. A host supplies:
//! * a [`HostDocument`] the loader appends its script to,
//! * a [`HostElement`] per mounted `<szn-select>` node,
//! * a [`RenderScheduler`] telling the component framework to re-render.
//!
//! All three run on the page's single event thread; only the load latch is shared
//! across threads.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;
use szn_domain::attributes::RequestedAttributes;
use szn_domain::props::{PropertyValue, SelectProperty};
use szn_domain::script::ScriptTag;

/// A host page operation failed.
#[szn_derive::szn_error]
pub enum HostError {
    /// The underlying DOM rejected the operation.
    #[error("DOM operation failed{}: {message}", format_context(.context))]
    Dom { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The listener id is not registered on the element.
    #[error("Unknown listener{}: {message}", format_context(.context))]
    UnknownListener { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal host error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Handle of a registered ready listener, needed to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Callback invoked with the attribute set of every `szn-select:ready` event.
pub type ReadyHandler = Box<dyn Fn(RequestedAttributes)>;

/// The document the loader script is injected into.
pub trait HostDocument {
    /// Appends `script` to the document head.
    ///
    /// # Errors
    /// [`HostError`] if the host refuses the element.
    fn append_to_head(&self, script: &ScriptTag) -> Result<(), HostError>;
}

/// The live `<szn-select>` node of one mounted component.
pub trait HostElement {
    /// Whether the element implementation has already upgraded this node.
    fn is_ready(&self) -> bool;

    /// Root attributes the element currently asks for, if it exposes them.
    fn requested_attributes(&self) -> Option<RequestedAttributes>;

    /// Assigns a property-only knob on the node.
    ///
    /// # Errors
    /// [`HostError`] if the assignment is rejected.
    fn set_property(&self, property: SelectProperty, value: &PropertyValue) -> Result<(), HostError>;

    /// Registers `handler` for `szn-select:ready` events.
    ///
    /// # Errors
    /// [`HostError`] if the listener cannot be attached.
    fn add_ready_listener(&self, handler: ReadyHandler) -> Result<ListenerId, HostError>;

    /// Removes a listener registered through [`HostElement::add_ready_listener`].
    ///
    /// # Errors
    /// [`HostError::UnknownListener`] for ids that are not registered.
    fn remove_ready_listener(&self, id: ListenerId) -> Result<(), HostError>;
}

/// Asks the host component framework to re-render a component.
pub trait RenderScheduler {
    fn schedule_render(&self);
}

macro_rules! forward_document {
    ($($ptr:ty),*) => {$(
        impl<T: HostDocument + ?Sized> HostDocument for $ptr {
            fn append_to_head(&self, script: &ScriptTag) -> Result<(), HostError> {
                (**self).append_to_head(script)
            }
        }
    )*};
}

macro_rules! forward_element {
    ($($ptr:ty),*) => {$(
        impl<T: HostElement + ?Sized> HostElement for $ptr {
            fn is_ready(&self) -> bool {
                (**self).is_ready()
            }

            fn requested_attributes(&self) -> Option<RequestedAttributes> {
                (**self).requested_attributes()
            }

            fn set_property(&self, property: SelectProperty, value: &PropertyValue) -> Result<(), HostError> {
                (**self).set_property(property, value)
            }

            fn add_ready_listener(&self, handler: ReadyHandler) -> Result<ListenerId, HostError> {
                (**self).add_ready_listener(handler)
            }

            fn remove_ready_listener(&self, id: ListenerId) -> Result<(), HostError> {
                (**self).remove_ready_listener(id)
            }
        }
    )*};
}

forward_document!(&T, Rc<T>, Arc<T>);
forward_element!(&T, Rc<T>, Arc<T>);

impl<F: Fn()> RenderScheduler for F {
    fn schedule_render(&self) {
        self()
    }
}
