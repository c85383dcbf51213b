//! Tabchart Demo — headless replay of the multiband curve editor.
//!
//! Reads a recorded pointer script, drives the effect layout with it and
//! writes the final frame (points, polylines, draw commands) as JSON.

mod config;
mod replay;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tabchart_core::PlotRect;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::replay::DemoError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(DemoConfig::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: DemoConfig) -> Result<(), DemoError> {
    let events = match &config.script {
        Some(path) => {
            tracing::info!("loading script {}", path.display());
            replay::parse_script(&fs::read_to_string(path)?)?
        }
        None => Vec::new(),
    };

    let preset = match &config.preset {
        Some(path) => {
            tracing::info!("loading preset {}", path.display());
            Some(fs::read_to_string(path)?)
        }
        None => None,
    };

    let window = PlotRect::from_size(0.0, 0.0, config.width, config.height);
    let frame = replay::replay(window, preset.as_deref(), &events)?;
    let json = replay::to_json(&frame)?;

    match &config.output {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!("frame written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
