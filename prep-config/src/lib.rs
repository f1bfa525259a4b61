//! Core module for preparing the EaCoN pipeline configuration
//!
//! The array family of the raw data directory (CytoScan or OncoScan)
//! decides the default segmentation tuning parameters written to
//! config.yaml, alongside the container image, thread count, design
//! path and cold storage locations.

use anyhow::Result;
use std::path::PathBuf;

pub mod cli;
pub mod core;

pub fn lib_prep_config(args: Vec<String>) -> Result<PathBuf> {
    let args = cli::Args::from(args);
    let config = crate::core::prepare_config(&args)?;

    log::info!("SUCCESS: configuration written to {}", config.display());
    Ok(config)
}
