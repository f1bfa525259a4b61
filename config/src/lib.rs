use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod fns;
pub use fns::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// array families
pub const CYTOSCAN_ARRAY: &str = "CytoScanHD_Array";
pub const ONCOSCAN_ARRAY: &str = "OncoScan_CNV";

// suffixes
pub const CEL_SUFFIX: &str = "CEL";
pub const CEL_EXTENSION: &str = ".CEL";
pub const A_CHANNEL_SUFFIX: &str = "A.CEL";
pub const C_CHANNEL_SUFFIX: &str = "C.CEL";
pub const FASTQ_PATTERN: &str = r"^.*f(ast)?q(.gz)?$";
pub const READ_MARKERS: [&str; 4] = ["R1", "R2", "fastq", "gz"];

// column names
pub const STRONGR_SAMPLE: &str = "Sample_id";
pub const STRONGR_CEL: &str = "CEL";
pub const EACON_SAMPLE: &str = "SampleName";
pub const EACON_CEL: &str = "cel_files";
pub const AT_CHANNEL: &str = "ATChannelCel";
pub const GC_CHANNEL: &str = "GCChannelCel";
pub const PROJECT: &str = "Project";
pub const FASTQ_SAMPLE: &str = "Sample_id";
pub const UPSTREAM_FILE: &str = "Upstream_file";
pub const DOWNSTREAM_FILE: &str = "Downstream_file";
pub const CONDITION_PREFIX: &str = "Condition_";
pub const EMPTY: &str = "Empty";

// projects, ordered by precedence
pub const MATCHR: (&str, &str) = ("MR", "MatchR");
pub const MOSCATO: (&str, &str) = ("M", "Moscato");
pub const SAFIR: ([&str; 3], &str) = (["B", "L", "T"], "Safir");
pub const PATHMOL: &str = "Pathmol";

// file names
pub const DESIGN: &str = "design.tsv";
pub const CONFIG: &str = "config.yaml";
pub const COLD_STORAGE: &str = "cold_storage.yaml";

// pipeline defaults
pub const SINGULARITY_IMAGE: &str = "docker://continuumio/miniconda3:4.4.10";
pub const SEGMENTER: &str = "ASCAT";
pub const GENOME: &str = "hg19";
pub const PENALTY: u32 = 50;
pub const MIN_THREADS: usize = 1;

/// microarray families understood by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrayType {
    /// single channel, one `<id>.CEL` per sample
    #[serde(rename = "CytoScanHD_Array")]
    CytoScan,
    /// dual channel, `<id>A.CEL` + `<id>C.CEL` per sample
    #[serde(rename = "OncoScan_CNV")]
    OncoScan,
}

impl ArrayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayType::CytoScan => CYTOSCAN_ARRAY,
            ArrayType::OncoScan => ONCOSCAN_ARRAY,
        }
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// downstream tool the design is written for; only the
/// CEL column names differ between both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DesignTarget {
    #[default]
    Strongr,
    Eacon,
}

impl DesignTarget {
    pub fn from_eacon(eacon: bool) -> Self {
        if eacon {
            DesignTarget::Eacon
        } else {
            DesignTarget::Strongr
        }
    }

    pub fn sample_column(&self) -> &'static str {
        match self {
            DesignTarget::Strongr => STRONGR_SAMPLE,
            DesignTarget::Eacon => EACON_SAMPLE,
        }
    }

    pub fn cel_column(&self) -> &'static str {
        match self {
            DesignTarget::Strongr => STRONGR_CEL,
            DesignTarget::Eacon => EACON_CEL,
        }
    }
}

/// error handling shared by all cnvprep tools
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("ERROR: could not find directory {0:?}")]
    DirectoryNotFound(PathBuf),
    #[error("ERROR: {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("ERROR: output file already exists ({0:?})")]
    OutputAlreadyExists(PathBuf),
    #[error("ERROR: missing expected column: {0}")]
    MissingExpectedColumn(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// raw data directory validation
pub fn validate_dir(dir: &Path) -> Result<(), PrepError> {
    if !dir.exists() {
        return Err(PrepError::DirectoryNotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(PrepError::NotADirectory(dir.to_path_buf()));
    }

    Ok(())
}

/// refuse to overwrite an existing output
pub fn check_output(path: &Path) -> Result<(), PrepError> {
    if path.exists() {
        return Err(PrepError::OutputAlreadyExists(path.to_path_buf()));
    }

    Ok(())
}

/// Guess the array family of a raw data directory
///
/// Any entry ending in "CEL" that is not an A/C channel file means
/// CytoScan. Anything else, an empty directory included, falls back
/// to OncoScan.
///
/// # Example
///
/// ```rust, no_run
/// use config::{guess_array_type, ArrayType};
///
/// let array = guess_array_type(std::path::Path::new("raw")).unwrap();
/// assert_eq!(array, ArrayType::CytoScan);
/// ```
pub fn guess_array_type(dir: &Path) -> Result<ArrayType, PrepError> {
    validate_dir(dir)?;

    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        let name = name.to_string_lossy();

        let is_cel = name.ends_with(CEL_SUFFIX);
        let is_onco = name.ends_with(C_CHANNEL_SUFFIX) || name.ends_with(A_CHANNEL_SUFFIX);
        if is_cel && !is_onco {
            log::info!("INFO: single channel CEL file found: {}", name);
            return Ok(ArrayType::CytoScan);
        }
    }

    Ok(ArrayType::OncoScan)
}
