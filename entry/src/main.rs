/// cnvprep: file preparation for the EaCoN copy-number pipeline
///
/// This is the entry point for the cnvprep CLI.
/// It is responsible for parsing the CLI arguments
/// and executing the appropriate subcommand [prep-tool].
///
/// This wrapper offers 3 different subcommands:
/// - design
/// - config
/// - cold-storage
///
/// Each subcommand writes one of the files the pipeline expects:
/// the sample design (TSV), the pipeline configuration (YAML) and
/// the list of cold storage mount points (YAML).
///
/// To get help on the subcommands, you can run:
///
/// ```shell
/// cnvprep design -- --help
/// ```
///
use clap::{Args, Parser, Subcommand};
use cnvprep::{lib, Tool};
use log::{error, info, Level};
use simple_logger::init_with_level;

#[derive(Parser)]
#[command(name = "cnvprep")]
#[command(about = "cnvprep: file preparation for the EaCoN copy-number pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "design")]
    Design(PrepArgs),
    #[command(name = "config")]
    Config(PrepArgs),
    #[command(name = "cold-storage")]
    ColdStorage(PrepArgs),
}

#[derive(Args)]
struct PrepArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();
    let cli = Cli::parse();

    init();

    let (tool, args) = match cli.command {
        Commands::Design(args) => (Tool::Design, args.args),
        Commands::Config(args) => (Tool::Config, args.args),
        Commands::ColdStorage(args) => (Tool::ColdStorage, args.args),
    };

    lib(tool, args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}

fn init() {
    let message = format!(
        r#"

        cnvprep: file preparation for the EaCoN copy-number pipeline

        - design: sample design from a CEL/FASTQ directory
        - config: config.yaml with array-type dependent defaults
        - cold-storage: cold_storage.yaml mount point list

        > version: {}

        * to get help on the subcommands, run:
            cnvprep <SUBCOMMAND> -- --help

        "#,
        env!("CARGO_PKG_VERSION")
    );

    eprintln!("{}", message);
}
