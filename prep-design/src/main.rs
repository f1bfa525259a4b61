//! Core module for building EaCoN/STRonGR design files
//!
//! Scans a raw data directory (CEL or FASTQ) and writes a
//! tab-separated design with one row per sample.

use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use prep_design::{cli::Args, core::prepare_design};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    prepare_design(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
