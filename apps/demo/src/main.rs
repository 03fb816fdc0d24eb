#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use szn_demo::args::Cli;
use szn_logger::{FileOutput, LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.parse::<LevelFilter>().context("Invalid log level")?;
    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(dir) = &cli.log_dir {
        logger = logger.file(FileOutput::new(dir));
    }
    let _log = logger.init()?;

    let report = szn_demo::run(&cli)?;

    println!("<!-- head -->");
    for script in &report.head {
        println!("{}", serde_json::to_string_pretty(script)?);
    }
    println!("<!-- body -->");
    for markup in &report.markup {
        println!("{markup}");
    }
    println!("<!-- {} render request(s) -->", report.renders);

    Ok(())
}
