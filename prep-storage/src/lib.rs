//! Core module for listing cold storage mount points
//!
//! The pipeline reads raw data from read-only mount points declared
//! in cold_storage.yaml; this module writes that list.

use anyhow::Result;
use config::write_yaml;
use serde::Serialize;
use std::path::PathBuf;

pub mod cli;
use cli::Args;

#[derive(Debug, PartialEq, Serialize)]
pub struct ColdStorage {
    pub cold_storage: Vec<String>,
}

impl From<&Args> for ColdStorage {
    fn from(args: &Args) -> Self {
        Self {
            cold_storage: args.paths.clone(),
        }
    }
}

pub fn prepare_cold_storage(args: &Args) -> Result<PathBuf> {
    log::info!("INFO: running prep-storage with args: {:?}", args);

    write_yaml(&ColdStorage::from(args), &args.output)?;
    Ok(args.output.clone())
}

pub fn lib_prep_storage(args: Vec<String>) -> Result<PathBuf> {
    let args = Args::from(args);
    let output = prepare_cold_storage(&args)?;

    log::info!("SUCCESS: cold storage list written to {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_paths_are_required() {
        assert!(Args::try_parse_from(["prep-storage"]).is_err());
    }

    #[test]
    fn test_writes_path_list() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cold_storage.yaml");

        let args = Args::try_parse_from([
            "prep-storage",
            "/mnt/archive",
            "/mnt/backup",
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        prepare_cold_storage(&args).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "cold_storage:\n- /mnt/archive\n- /mnt/backup\n"
        );
    }

    #[test]
    fn test_default_output() {
        let args = Args::try_parse_from(["prep-storage", "/mnt/a"]).unwrap();

        assert_eq!(args.output, PathBuf::from("cold_storage.yaml"));
        assert_eq!(
            ColdStorage::from(&args),
            ColdStorage {
                cold_storage: vec!["/mnt/a".to_string()]
            }
        );
    }
}
