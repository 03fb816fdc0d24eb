use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use szn_domain::attributes::{EffectiveAttributes, RequestedAttributes};
use szn_kernel::host::RenderScheduler;
use tracing::debug;

/// Drops removal markers. Every other entry is kept as requested.
#[must_use]
pub fn effective_attributes(requested: &RequestedAttributes) -> EffectiveAttributes {
    requested.iter().filter_map(|(name, value)| value.map(|value| (name, value))).collect()
}

/// Root attribute state of one component, driven by the element's ready signals.
///
/// Removed attributes are simply absent from the next state; deleting them from the
/// live node is left to the render layer.
pub struct AttributeReconciler {
    current: RefCell<EffectiveAttributes>,
    scheduler: Rc<dyn RenderScheduler>,
}

impl fmt::Debug for AttributeReconciler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeReconciler").field("current", &self.current.borrow()).finish_non_exhaustive()
    }
}

impl AttributeReconciler {
    pub fn new(scheduler: Rc<dyn RenderScheduler>) -> Self {
        Self { current: RefCell::default(), scheduler }
    }

    /// Replaces the stored state with the filtered `requested` set and schedules a render.
    pub fn on_ready_signal(&self, requested: RequestedAttributes) {
        let next = effective_attributes(&requested);
        debug!(requested = requested.len(), effective = next.len(), "Ready signal received");

        *self.current.borrow_mut() = next;
        self.scheduler.schedule_render();
    }

    #[must_use]
    pub fn attributes(&self) -> EffectiveAttributes {
        self.current.borrow().clone()
    }
}
