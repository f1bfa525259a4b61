//! Core module for building EaCoN/STRonGR design files
//!
//! This module scans a raw data directory and turns its file names
//! into a sample design: CytoScan single channel CEL files, OncoScan
//! A/C channel pairs, or single/paired-end FASTQ files. Sample ids are
//! inferred from file names and, on request, projects (CEL) or
//! experimental conditions (FASTQ) are guessed from naming conventions.
//! File contents are never read.

use anyhow::Result;
use std::path::PathBuf;

pub mod cli;
pub mod core;
pub mod manifest;
pub mod utils;

pub use manifest::{Manifest, SampleMap, SampleRecord};

pub fn lib_prep_design(args: Vec<String>) -> Result<PathBuf> {
    let args = cli::Args::from(args);
    let design = crate::core::prepare_design(&args)?;

    log::info!("SUCCESS: design written to {}", design.display());
    Ok(design)
}
