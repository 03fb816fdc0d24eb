//! # CLI Argument Definitions

use clap::Parser;
use std::path::PathBuf;

/// Mounts szn-select bridges on an in-memory page and prints what the page ends up with.
#[derive(Debug, Parser)]
#[command(name = "szn-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mounts szn-select bridges on an in-memory page")]
pub struct Cli {
    /// Component props file (TOML, JSON or YAML), overlaid with `SZN__` environment variables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of components mounted on the page
    #[arg(short, long, default_value_t = 3)]
    pub instances: usize,

    /// Detail of the `szn-select:ready` event dispatched to every element
    #[arg(short, long, default_value = r#"{"attributes":{"data-szn-select--state":"closed"}}"#)]
    pub signal: String,

    /// Options rendered inside each select, as `value=label`
    #[arg(short, long = "option", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log verbosity (`error`, `warn`, `info`, `debug`, `trace`)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(value, label)| (value.to_owned(), label.to_owned()))
        .ok_or_else(|| format!("expected `value=label`, got `{raw}`"))
}
