use anyhow::Result;
use config::{guess_array_type, write_yaml, ArrayType};
use serde::Serialize;

use std::path::{Path, PathBuf};

use crate::cli::Args;

/// smoothing half-window; OncoScan disables smoothing with R's NULL
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SmoothK {
    Window(u32),
    Null(&'static str),
}

/// tuning parameters recommended for each array family
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDefaults {
    pub smooth_k: SmoothK,
    pub ser_pen: u32,
    pub nrf: f64,
    pub baf_filter: f64,
    pub nar: &'static str,
}

impl ArrayDefaults {
    pub fn for_array(array: ArrayType) -> Self {
        match array {
            ArrayType::CytoScan => Self {
                smooth_k: SmoothK::Window(5),
                ser_pen: 20,
                nrf: 1.0,
                baf_filter: 0.75,
                nar: "na33.r4",
            },
            ArrayType::OncoScan => Self {
                smooth_k: SmoothK::Null("NULL"),
                ser_pen: 40,
                nrf: 0.5,
                baf_filter: 0.9,
                nar: "na33.r2",
            },
        }
    }
}

// fields are kept in alphabetical order, as the pipeline's own
// config files are
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Params {
    pub arraytype: ArrayType,
    pub baf_filter: f64,
    pub genome: String,
    pub ldb: Option<String>,
    pub nar: String,
    pub nrf: f64,
    pub penalty: u32,
    pub scripts: String,
    pub segmenter: String,
    pub ser_pen: u32,
    pub smooth_k: SmoothK,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    pub cold_storage: Vec<String>,
    pub design: String,
    pub params: Params,
    pub singularity_docker_image: String,
    pub threads: usize,
    pub workdir: String,
}

impl PipelineConfig {
    /// Assemble the pipeline configuration for a given array family.
    /// Explicit tuning values take precedence over the array defaults.
    pub fn new(args: &Args, array: ArrayType, scripts: &Path) -> Self {
        let defaults = ArrayDefaults::for_array(array);

        let params = Params {
            arraytype: array,
            baf_filter: args.baf_filter.unwrap_or(defaults.baf_filter),
            genome: args.genome.clone(),
            ldb: args.ldb.clone(),
            nar: args
                .nar
                .clone()
                .unwrap_or_else(|| defaults.nar.to_string()),
            nrf: args.nrf.unwrap_or(defaults.nrf),
            penalty: args.penalty,
            scripts: scripts.display().to_string(),
            segmenter: args.segmenter.clone(),
            ser_pen: args.ser_pen.unwrap_or(defaults.ser_pen),
            smooth_k: args
                .smooth_k
                .map(SmoothK::Window)
                .unwrap_or(defaults.smooth_k),
        };

        Self {
            cold_storage: args.coldstorage.clone(),
            design: args.design.clone(),
            params,
            singularity_docker_image: args.singularity.clone(),
            threads: args.threads,
            workdir: args.workdir.display().to_string(),
        }
    }
}

/// directory holding the running executable
fn scripts_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Guess the array family of the raw data and write
/// `<workdir>/config.yaml`
pub fn prepare_config(args: &Args) -> Result<PathBuf> {
    log::info!("INFO: running prep-config with args: {:?}", args);

    let array = guess_array_type(&args.rawdata)?;
    log::info!("INFO: array type guessed as {}", array);

    let config = PipelineConfig::new(args, array, &scripts_dir()?);

    let output = args.output();
    if output.exists() {
        log::warn!("WARN: {} already exists and will be replaced", output.display());
    }
    write_yaml(&config, &output)?;

    Ok(output)
}
