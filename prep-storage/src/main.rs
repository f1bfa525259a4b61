//! Core module for listing cold storage mount points
//!
//! Writes the cold_storage.yaml file read by the EaCoN pipeline.

use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use prep_storage::{cli::Args, prepare_cold_storage};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    prepare_cold_storage(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
