use clap::Parser;
use config::{COLD_STORAGE, DESIGN, GENOME, MIN_THREADS, PENALTY, SEGMENTER, SINGULARITY_IMAGE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Prepare the config.yaml file of the EaCoN pipeline",
    after_help = "No magic here: please check the prepared configuration file!"
)]
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
        short = 's',
        long = "singularity",
        value_name = "IMAGE",
        help = "Name of the docker/singularity image",
        default_value(SINGULARITY_IMAGE)
    )]
    pub singularity: String,

    #[arg(
        long = "ldb",
        value_name = "PATH",
        help = "Path to ldb for supplementary analyses"
    )]
    pub ldb: Option<String>,

    #[arg(
        short = 'w',
        long = "workdir",
        value_name = "PATH",
        help = "Path to working directory, config.yaml is written there",
        default_value(".")
    )]
    pub workdir: PathBuf,

    #[arg(
        short = 't',
        long = "threads",
        value_name = "THREADS",
        help = "Maximum number of threads used",
        default_value_t = MIN_THREADS
    )]
    pub threads: usize,

    #[arg(
        short = 'd',
        long = "design",
        value_name = "PATH",
        help = "Path to the design file",
        default_value(DESIGN)
    )]
    pub design: String,

    #[arg(
        long = "coldstorage",
        value_name = "PATHS",
        value_delimiter = ',',
        num_args = 1..,
        help = "Paths to cold storage mount points, delimited by comma",
        default_value(COLD_STORAGE)
    )]
    pub coldstorage: Vec<String>,

    #[arg(
        long = "segmenter",
        value_name = "NAME",
        help = "Name of the segmenter used to analyse profiles",
        default_value(SEGMENTER)
    )]
    pub segmenter: String,

    #[arg(
        long = "genome",
        value_name = "ID",
        help = "The genome id",
        default_value(GENOME)
    )]
    pub genome: String,

    #[arg(
        long = "penalty",
        value_name = "VALUE",
        help = "Inverted penalty on new segment creation",
        default_value_t = PENALTY
    )]
    pub penalty: u32,

    #[arg(
        long = "smooth-k",
        value_name = "VALUE",
        help = "Half-window size for data smoothing [default depends on array type]"
    )]
    pub smooth_k: Option<u32>,

    #[arg(
        long = "ser-pen",
        value_name = "VALUE",
        help = "Penalty for the small events rescue step [default depends on array type]"
    )]
    pub ser_pen: Option<u32>,

    #[arg(
        long = "nrf",
        value_name = "VALUE",
        help = "Coefficient to multiply the L2R spread noise [default depends on array type]"
    )]
    pub nrf: Option<f64>,

    #[arg(
        long = "baf-filter",
        value_name = "VALUE",
        help = "BAF noise filtering threshold [default depends on array type]"
    )]
    pub baf_filter: Option<f64>,

    #[arg(
        long = "nar",
        value_name = "VERSION",
        help = "Array annotation release [default depends on array type]"
    )]
    pub nar: Option<String>,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    pub fn output(&self) -> PathBuf {
        self.workdir.join(config::CONFIG)
    }
}
