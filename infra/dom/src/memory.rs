use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use szn_domain::attributes::RequestedAttributes;
use szn_domain::props::{PropertyValue, SelectProperty};
use szn_domain::script::ScriptTag;
use szn_kernel::host::{HostDocument, HostElement, HostError, ListenerId, ReadyHandler, RenderScheduler};
use tracing::trace;

/// In-memory document head. Records every script appended to it.
///
/// Shareable across threads so concurrent mounts can target one page.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    head: Mutex<Vec<ScriptTag>>,
    rejecting: bool,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose head refuses every append.
    #[must_use]
    pub fn rejecting() -> Self {
        Self { head: Mutex::default(), rejecting: true }
    }

    /// Snapshot of the head, in append order.
    #[must_use]
    pub fn scripts(&self) -> Vec<ScriptTag> {
        self.head.lock().clone()
    }

    #[must_use]
    pub fn script_count(&self) -> usize {
        self.head.lock().len()
    }
}

impl HostDocument for MemoryDocument {
    fn append_to_head(&self, script: &ScriptTag) -> Result<(), HostError> {
        if self.rejecting {
            return Err(HostError::Dom {
                message: "head rejected the script element".into(),
                context: None,
            });
        }
        self.head.lock().push(script.clone());
        trace!(src = ?script.src(), "Script appended to in-memory head");
        Ok(())
    }
}

type SharedHandler = Rc<dyn Fn(RequestedAttributes)>;

/// In-memory `<szn-select>` node.
///
/// Plays the custom element's side in tests and the demo: it can be marked ready, expose
/// requested attributes and dispatch `szn-select:ready` to registered listeners.
#[derive(Default)]
pub struct MemoryElement {
    ready: Cell<bool>,
    requested: RefCell<Option<RequestedAttributes>>,
    properties: RefCell<FxHashMap<SelectProperty, PropertyValue>>,
    listeners: RefCell<FxHashMap<ListenerId, SharedHandler>>,
    next_listener: Cell<u64>,
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("ready", &self.ready.get())
            .field("requested", &self.requested.borrow())
            .field("properties", &self.properties.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A node the element implementation already upgraded, requesting `attributes`.
    #[must_use]
    pub fn upgraded(attributes: RequestedAttributes) -> Self {
        let element = Self::new();
        element.ready.set(true);
        *element.requested.borrow_mut() = Some(attributes);
        element
    }

    /// Marks the node ready and notifies every listener, as the element does after upgrading
    /// or when it wants different root attributes.
    pub fn dispatch_ready(&self, attributes: RequestedAttributes) {
        self.ready.set(true);
        *self.requested.borrow_mut() = Some(attributes.clone());

        // Handlers may register or remove listeners, so dispatch over a snapshot.
        let mut handlers: Vec<_> =
            self.listeners.borrow().iter().map(|(id, handler)| (*id, Rc::clone(handler))).collect();
        handlers.sort_unstable_by_key(|(id, _)| *id);

        trace!(listeners = handlers.len(), "Dispatching ready signal");
        for (_, handler) in handlers {
            handler(attributes.clone());
        }
    }

    #[must_use]
    pub fn property(&self, property: SelectProperty) -> Option<PropertyValue> {
        self.properties.borrow().get(&property).cloned()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl HostElement for MemoryElement {
    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn requested_attributes(&self) -> Option<RequestedAttributes> {
        self.requested.borrow().clone()
    }

    fn set_property(&self, property: SelectProperty, value: &PropertyValue) -> Result<(), HostError> {
        self.properties.borrow_mut().insert(property, value.clone());
        Ok(())
    }

    fn add_ready_listener(&self, handler: ReadyHandler) -> Result<ListenerId, HostError> {
        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(id.get() + 1);
        self.listeners.borrow_mut().insert(id, Rc::from(handler));
        Ok(id)
    }

    fn remove_ready_listener(&self, id: ListenerId) -> Result<(), HostError> {
        self.listeners.borrow_mut().remove(&id).map(drop).ok_or_else(|| HostError::UnknownListener {
            message: format!("listener {} is not registered", id.get()).into(),
            context: None,
        })
    }
}

/// Render scheduler that only counts requests.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    renders: Cell<usize>,
}

impl CountingScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl RenderScheduler for CountingScheduler {
    fn schedule_render(&self) {
        self.renders.set(self.renders.get() + 1);
    }
}
