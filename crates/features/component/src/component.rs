use crate::error::{ComponentError, ComponentErrorExt};
use crate::reconciler::AttributeReconciler;
use crate::render::{Markup, render};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use szn_domain::attributes::EffectiveAttributes;
use szn_domain::props::{SelectProperty, SelectProps};
use szn_kernel::host::{HostDocument, HostElement, ListenerId, RenderScheduler};
use szn_loader::{BootstrapOutcome, LoaderBootstrapper};
use tracing::{debug, warn};

/// One mounted `<szn-select>` bridge.
///
/// Lifecycle, driven by the host component framework:
/// 1. [`SznSelect::mount`] once the node exists,
/// 2. [`SznSelect::render`] whenever the scheduler asks for it, followed by [`SznSelect::updated`],
/// 3. [`SznSelect::unmount`] (or drop) when the node goes away.
pub struct SznSelect<E: HostElement> {
    props: SelectProps,
    element: E,
    reconciler: Rc<AttributeReconciler>,
    scheduler: Rc<dyn RenderScheduler>,
    listener: Cell<Option<ListenerId>>,
}

impl<E: HostElement> fmt::Debug for SznSelect<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SznSelect")
            .field("props", &self.props)
            .field("reconciler", &self.reconciler)
            .field("listener", &self.listener.get())
            .finish_non_exhaustive()
    }
}

impl<E: HostElement> SznSelect<E> {
    pub fn new(props: SelectProps, element: E, scheduler: Rc<dyn RenderScheduler>) -> Self {
        let reconciler = Rc::new(AttributeReconciler::new(Rc::clone(&scheduler)));
        Self { props, element, reconciler, scheduler, listener: Cell::new(None) }
    }

    /// Subscribes to the element's ready signal, adopts the attributes of an already upgraded
    /// element and bootstraps the loader.
    ///
    /// # Errors
    /// * [`ComponentError::Internal`] if the component is already mounted.
    /// * [`ComponentError::Host`] if the listener or a property cannot be set.
    /// * [`ComponentError::Loader`] if the loader script cannot be injected.
    pub fn mount<D: HostDocument>(&self, loader: &LoaderBootstrapper<D>) -> Result<BootstrapOutcome, ComponentError> {
        if self.is_mounted() {
            return Err("component is already mounted".into());
        }

        let reconciler = Rc::clone(&self.reconciler);
        let id = self
            .element
            .add_ready_listener(Box::new(move |requested| reconciler.on_ready_signal(requested)))
            .context("Failed to subscribe to the ready signal")?;
        self.listener.set(Some(id));

        if self.element.is_ready()
            && let Some(requested) = self.element.requested_attributes()
        {
            debug!("Element already upgraded at mount");
            self.reconciler.on_ready_signal(requested);
            self.sync_properties()?;
        }

        loader.bootstrap(&self.props.loader_options).context("Failed to bootstrap the loader")
    }

    /// Pushes the property-only knobs onto the node. Call after every render.
    ///
    /// # Errors
    /// [`ComponentError::Host`] if the node rejects a property.
    pub fn updated(&self) -> Result<(), ComponentError> {
        self.sync_properties()
    }

    /// Replaces the props and schedules a render.
    pub fn set_props(&mut self, props: SelectProps) {
        self.props = props;
        self.scheduler.schedule_render();
    }

    #[must_use]
    pub const fn props(&self) -> &SelectProps {
        &self.props
    }

    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Current root attributes.
    #[must_use]
    pub fn attributes(&self) -> EffectiveAttributes {
        self.reconciler.attributes()
    }

    /// Component markup with `slot` (the options) inside the `<select>`.
    #[must_use]
    pub fn render(&self, slot: Vec<Markup>) -> Markup {
        render(&self.props, &self.reconciler.attributes(), slot)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.get().is_some()
    }

    /// Removes the ready listener. Unmounting an unmounted component does nothing.
    ///
    /// # Errors
    /// [`ComponentError::Host`] if the host cannot remove the listener.
    pub fn unmount(&self) -> Result<(), ComponentError> {
        match self.listener.take() {
            Some(id) => self.element.remove_ready_listener(id).context("Failed to remove the ready listener"),
            None => Ok(()),
        }
    }

    fn sync_properties(&self) -> Result<(), ComponentError> {
        for property in SelectProperty::ALL {
            self.element
                .set_property(property, &self.props.property(property))
                .context(property.js_name())?;
        }
        Ok(())
    }
}

impl<E: HostElement> Drop for SznSelect<E> {
    fn drop(&mut self) {
        if let Err(e) = self.unmount() {
            warn!(error = %e, "Ready listener cleanup failed");
        }
    }
}
