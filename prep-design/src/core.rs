//! Directory scanners turning raw data directories into designs.

use anyhow::Result;
use config::{check_output, guess_array_type, validate_dir, ArrayType, DesignTarget};

use std::path::{Path, PathBuf};

pub mod cel;
pub mod fastq;

pub use cel::{parse_cyto_dir, parse_onco_dir};
pub use fastq::{parse_fastq_dir_pair, parse_fastq_dir_single};

use crate::cli::Args;
use crate::manifest::Manifest;

const PREVIEW_ROWS: usize = 5;

/// flags shared by every scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub target: DesignTarget,
    pub guess_conditions: bool,
}

/// kind of raw data directory to scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    CytoScan,
    OncoScan,
    FastqSingle,
    FastqPair,
}

impl From<ArrayType> for Mode {
    fn from(array: ArrayType) -> Self {
        match array {
            ArrayType::CytoScan => Mode::CytoScan,
            ArrayType::OncoScan => Mode::OncoScan,
        }
    }
}

/// use the requested mode or fall back to CEL array detection
pub fn resolve_mode(dir: &Path, mode: Option<Mode>) -> Result<Mode> {
    match mode {
        Some(mode) => Ok(mode),
        None => {
            let array = guess_array_type(dir)?;
            log::info!("INFO: no mode selected, array type guessed as {}", array);
            Ok(array.into())
        }
    }
}

/// run the scanner matching `mode` over `dir`
pub fn scan(dir: &Path, mode: Mode, config: &ScanConfig) -> Result<Manifest> {
    match mode {
        Mode::CytoScan => parse_cyto_dir(dir, config),
        Mode::OncoScan => parse_onco_dir(dir, config),
        Mode::FastqSingle => parse_fastq_dir_single(dir, config),
        Mode::FastqPair => parse_fastq_dir_pair(dir, config),
    }
}

/// Build and write the design file described by `args`
///
/// The output path is checked before anything is scanned; an
/// existing design is never overwritten.
pub fn prepare_design(args: &Args) -> Result<PathBuf> {
    log::info!("INFO: running prep-design with args: {:?}", args);

    check_output(&args.design)?;
    validate_dir(&args.rawdata)?;

    let mode = resolve_mode(&args.rawdata, args.mode())?;
    let manifest = scan(&args.rawdata, mode, &args.scan_config())?;

    log::info!("INFO: design preview:\n{}", manifest.preview(PREVIEW_ROWS));
    manifest.write_to(&args.design)?;

    Ok(args.design.clone())
}
