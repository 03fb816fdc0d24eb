//! In-memory page driver behind the `szn-demo` binary.

pub mod args;

use anyhow::{Context, Result};
use std::rc::Rc;
use std::sync::Arc;
use szn::component::{Element, Markup, SznSelect};
use szn::dom::{CountingScheduler, MemoryDocument, MemoryElement};
use szn::domain::props::SelectProps;
use szn::domain::script::ScriptTag;
use szn::kernel::config::load_select_props;
use szn::kernel::signal::requested_attributes_from_detail;
use szn::loader::{BootstrapOutcome, LoadLatch, LoaderBootstrapper};
use tracing::{info, warn};

use crate::args::Cli;

/// What the page looks like after mounting and signalling.
#[derive(Debug)]
pub struct PageReport {
    pub outcomes: Vec<BootstrapOutcome>,
    pub head: Vec<ScriptTag>,
    pub markup: Vec<String>,
    pub renders: usize,
}

/// Mounts `cli.instances` components, dispatches the ready signal to each element and
/// renders them.
///
/// # Errors
/// Fails on invalid configuration, an unparsable signal or a failed mount.
pub fn run(cli: &Cli) -> Result<PageReport> {
    let props = match &cli.config {
        Some(path) => load_select_props(path).with_context(|| format!("Invalid props in {}", path.display()))?,
        None => SelectProps::default(),
    };
    let detail: serde_json::Value = serde_json::from_str(&cli.signal).context("Ready signal is not valid JSON")?;

    let document = Arc::new(MemoryDocument::new());
    let loader = LoaderBootstrapper::builder().document(Arc::clone(&document)).latch(LoadLatch::new()).build();
    let scheduler = Rc::new(CountingScheduler::new());

    let components = (0..cli.instances)
        .map(|_| SznSelect::new(props.clone(), Rc::new(MemoryElement::new()), scheduler.clone()))
        .collect::<Vec<_>>();

    let outcomes = components
        .iter()
        .map(|component| component.mount(&loader))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to mount components")?;
    info!(instances = components.len(), scripts = document.script_count(), "Components mounted");

    match requested_attributes_from_detail(&detail) {
        Some(requested) => components.iter().for_each(|component| component.element().dispatch_ready(requested.clone())),
        None => warn!("Signal carries no attributes object, nothing dispatched"),
    }

    let mut markup = Vec::with_capacity(components.len());
    for component in &components {
        markup.push(component.render(slot(&cli.options)).to_html());
        component.updated().context("Failed to update element properties")?;
    }

    for component in &components {
        component.unmount().context("Failed to unmount component")?;
    }

    Ok(PageReport { outcomes, head: document.scripts(), markup, renders: scheduler.renders() })
}

fn slot(options: &[(String, String)]) -> Vec<Markup> {
    options
        .iter()
        .map(|(value, label)| {
            Element::new("option").attribute("value", value).children([Markup::text(label)]).into()
        })
        .collect()
}
