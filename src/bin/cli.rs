// src/bin/cli.rs
use std::env;

use h4a_report::cli::{self, Mode};
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli::parse_args(env::args().skip(1))? {
        Mode::Help => eprintln!("{}", cli::usage()),
        Mode::Run(params) => cli::run(&params)?,
    }
    Ok(())
}
