use clap::Parser;
use config::COLD_STORAGE;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Prepare the cold_storage.yaml file of the EaCoN pipeline",
    after_help = "Default paths may not suit you... set these variables!"
)]
pub struct Args {
    #[arg(
        required = true,
        num_args = 1..,
        value_name = "PATH",
        help = "Space separated list of paths to cold storage points"
    )]
    pub paths: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path to output file",
        default_value(COLD_STORAGE)
    )]
    pub output: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}
