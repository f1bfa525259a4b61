//! Core module for preparing the EaCoN pipeline configuration
//!
//! Writes <workdir>/config.yaml with array-type dependent defaults.

use clap::Parser;
use log::{error, info, Level};
use simple_logger::init_with_level;

use prep_config::{cli::Args, core::prepare_config};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    prepare_config(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
