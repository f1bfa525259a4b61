use clap::{ArgGroup, Parser};
use config::{DesignTarget, DESIGN};
use std::path::PathBuf;

use crate::core::{Mode, ScanConfig};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Generate the design file of a CytoScan/OncoScan/FASTQ raw data directory",
    after_help = "No magic here: please check the prepared design!"
)]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Args {
    #[arg(
        short = 'r',
        long = "rawdata",
        value_name = "PATH",
        help = "Path to raw data directory",
        default_value(".")
    )]
    pub rawdata: PathBuf,

    #[arg(
        short = 'd',
        long = "design",
        value_name = "PATH",
        help = "Output path to design file",
        default_value(DESIGN)
    )]
    pub design: PathBuf,

    #[arg(
        short = 'e',
        long = "eacon",
        help = "Design file is meant to be used by EaCoN itself, and not STRonGR"
    )]
    pub eacon: bool,

    #[arg(
        short = 'g',
        long = "guess-conditions",
        help = "Try to guess projects (CEL) or conditions (FASTQ) from file names"
    )]
    pub guess_conditions: bool,

    #[arg(long = "cytoscan", group = "mode", help = "CytoScan analysis preparation")]
    pub cytoscan: bool,

    #[arg(long = "oncoscan", group = "mode", help = "OncoScan analysis preparation")]
    pub oncoscan: bool,

    #[arg(
        long = "fastq-single",
        group = "mode",
        help = "Prepare analysis from single-end FASTQ files"
    )]
    pub fastq_single: bool,

    #[arg(
        long = "fastq-pair",
        group = "mode",
        help = "Prepare analysis from paired-end FASTQ files"
    )]
    pub fastq_pair: bool,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    /// selected mode, none means CEL auto-detection
    pub fn mode(&self) -> Option<Mode> {
        match (
            self.cytoscan,
            self.oncoscan,
            self.fastq_single,
            self.fastq_pair,
        ) {
            (true, _, _, _) => Some(Mode::CytoScan),
            (_, true, _, _) => Some(Mode::OncoScan),
            (_, _, true, _) => Some(Mode::FastqSingle),
            (_, _, _, true) => Some(Mode::FastqPair),
            _ => None,
        }
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            target: DesignTarget::from_eacon(self.eacon),
            guess_conditions: self.guess_conditions,
        }
    }
}
