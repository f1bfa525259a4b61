use serde::Serialize;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::PrepError;

/// return a tab-separated writer over any sink
pub fn tsv_writer<W: Write>(sink: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(sink)
}

/// render any serializable value as block-style YAML
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String, PrepError> {
    Ok(serde_yaml::to_string(data)?)
}

/// write a serializable value to a YAML file
pub fn write_yaml<T: Serialize>(data: &T, path: &Path) -> Result<(), PrepError> {
    log::info!("INFO: writing {}...", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(to_yaml(data)?.as_bytes())?;
    writer.flush()?;

    Ok(())
}
