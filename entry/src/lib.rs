use anyhow::Result;
use std::path::PathBuf;

use prep_config::lib_prep_config;
use prep_design::lib_prep_design;
use prep_storage::lib_prep_storage;

/// tools reachable from the cnvprep entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Design,
    Config,
    ColdStorage,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Design => "prep-design",
            Tool::Config => "prep-config",
            Tool::ColdStorage => "prep-storage",
        }
    }
}

/// Forward raw arguments to a tool and return the written file
///
/// # Example
///
/// ```rust, no_run
/// use cnvprep::{lib, Tool};
///
/// let args = vec!["--rawdata".to_string(), "raw".to_string(), "--oncoscan".to_string()];
/// let design = lib(Tool::Design, args).unwrap();
/// ```
pub fn lib(tool: Tool, args: Vec<String>) -> Result<PathBuf> {
    log::info!("INFO: running {} with {:?}", tool.name(), args);

    match tool {
        Tool::Design => lib_prep_design(args),
        Tool::Config => lib_prep_config(args),
        Tool::ColdStorage => lib_prep_storage(args),
    }
}
