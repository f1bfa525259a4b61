use anyhow::Result;
use config::{
    validate_dir, AT_CHANNEL, A_CHANNEL_SUFFIX, CEL_EXTENSION, GC_CHANNEL, PROJECT,
};

use std::path::{Path, PathBuf};

use crate::core::ScanConfig;
use crate::manifest::{Manifest, SampleMap, SampleRecord};
use crate::utils::{c_channel_path, channel_sample_id, file_name, guess_project, sample_stem};

/// regular files directly under `dir` whose name ends with `suffix`,
/// in lexicographic order
fn cel_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    validate_dir(dir)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && file_name(&path).ends_with(suffix) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn absolute(path: &Path) -> Result<String> {
    Ok(std::path::absolute(path)?.display().to_string())
}

/// Build a design from a CytoScan directory, one row per `.CEL` file
pub fn parse_cyto_dir(dir: &Path, config: &ScanConfig) -> Result<Manifest> {
    log::info!("INFO: CytoScan path identified as: {}", dir.display());

    let sample = config.target.sample_column();
    let cel = config.target.cel_column();

    let mut samples = SampleMap::new();
    for path in cel_files(dir, CEL_EXTENSION)? {
        let name = file_name(&path);
        let mut record = SampleRecord::new()
            .with(sample, sample_stem(&path))
            .with(cel, absolute(&path)?);

        if config.guess_conditions {
            record.insert(PROJECT, guess_project(&name));
        }

        samples.insert(name, record);
    }

    log::info!("INFO: {} CytoScan samples found", samples.len());
    Ok(Manifest::from_records(samples).select_or_all(&[sample, cel, PROJECT]))
}

/// Build a design from an OncoScan directory, one row per A/C pair
///
/// Only A channel files are visited; the C channel path is derived
/// from the A one.
pub fn parse_onco_dir(dir: &Path, config: &ScanConfig) -> Result<Manifest> {
    log::info!("INFO: OncoScan path identified as: {}", dir.display());

    let sample = config.target.sample_column();

    let mut samples = SampleMap::new();
    for path in cel_files(dir, A_CHANNEL_SUFFIX)? {
        let name = file_name(&path);
        let at = absolute(&path)?;
        let gc = c_channel_path(&at);

        if !Path::new(&gc).exists() {
            log::warn!("WARN: no C channel file found for {}", name);
        }

        let mut record = SampleRecord::new()
            .with(sample, channel_sample_id(&sample_stem(&path)))
            .with(AT_CHANNEL, at)
            .with(GC_CHANNEL, gc);

        if config.guess_conditions {
            record.insert(PROJECT, guess_project(&name));
        }

        samples.insert(name, record);
    }

    log::info!("INFO: {} OncoScan samples found", samples.len());
    Ok(Manifest::from_records(samples).select_or_all(&[
        sample, AT_CHANNEL, GC_CHANNEL, PROJECT,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{DesignTarget, PrepError};
    use std::fs::{create_dir, File};

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    fn path_of(dir: &Path, name: &str) -> String {
        dir.join(name).display().to_string()
    }

    #[test]
    fn test_cyto_one_row_per_cel() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["b.CEL", "a.CEL", "notes.txt", "c.cel"]);
        create_dir(dir.path().join("d.CEL")).unwrap();

        let manifest = parse_cyto_dir(dir.path(), &ScanConfig::default()).unwrap();

        assert_eq!(manifest.columns(), ["Sample_id", "CEL"]);
        assert_eq!(manifest.column("Sample_id").unwrap(), vec![Some("a"), Some("b")]);
        assert_eq!(
            manifest.column("CEL").unwrap(),
            vec![
                Some(path_of(dir.path(), "a.CEL").as_str()),
                Some(path_of(dir.path(), "b.CEL").as_str())
            ]
        );
    }

    #[test]
    fn test_cyto_projects_and_eacon_columns() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["MR1.CEL", "M2.CEL", "T3.CEL", "X4.CEL"]);

        let config = ScanConfig {
            target: DesignTarget::Eacon,
            guess_conditions: true,
        };
        let manifest = parse_cyto_dir(dir.path(), &config).unwrap();

        assert_eq!(manifest.columns(), ["SampleName", "cel_files", "Project"]);
        assert_eq!(
            manifest.column("Project").unwrap(),
            vec![Some("Moscato"), Some("MatchR"), Some("Safir"), Some("Pathmol")]
        );
    }

    #[test]
    fn test_onco_pairs_anchor_on_a_channel() {
        let dir = tempfile::tempdir().unwrap();
        touch(
            dir.path(),
            &["P1_A.CEL", "P1_C.CEL", "P2_A.CEL", "P2_C.CEL", "P3_C.CEL"],
        );

        let manifest = parse_onco_dir(dir.path(), &ScanConfig::default()).unwrap();

        assert_eq!(
            manifest.columns(),
            ["Sample_id", "ATChannelCel", "GCChannelCel"]
        );
        assert_eq!(manifest.column("Sample_id").unwrap(), vec![Some("P1"), Some("P2")]);

        let at = manifest.column("ATChannelCel").unwrap();
        let gc = manifest.column("GCChannelCel").unwrap();
        for (a, c) in at.iter().zip(gc.iter()) {
            assert_eq!(a.unwrap().replace("A.CEL", "C.CEL"), c.unwrap());
        }
        assert_eq!(gc[0], Some(path_of(dir.path(), "P1_C.CEL").as_str()));
    }

    #[test]
    fn test_onco_with_projects() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["B01_A.CEL", "B01_C.CEL"]);

        let config = ScanConfig {
            guess_conditions: true,
            ..Default::default()
        };
        let manifest = parse_onco_dir(dir.path(), &config).unwrap();

        assert_eq!(
            manifest.columns(),
            ["Sample_id", "ATChannelCel", "GCChannelCel", "Project"]
        );
        assert_eq!(manifest.column("Project").unwrap(), vec![Some("Safir")]);
    }

    struct Cwd(PathBuf);

    impl Drop for Cwd {
        fn drop(&mut self) {
            std::env::set_current_dir(&self.0).unwrap();
        }
    }

    #[test]
    fn test_relative_rawdata_gives_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join("cyto")).unwrap();
        create_dir(dir.path().join("onco")).unwrap();
        touch(&dir.path().join("cyto"), &["s1.CEL"]);
        touch(&dir.path().join("onco"), &["P1_A.CEL", "P1_C.CEL"]);

        let _restore = Cwd(std::env::current_dir().unwrap());
        std::env::set_current_dir(dir.path()).unwrap();
        let cwd = std::env::current_dir().unwrap();

        let cyto = parse_cyto_dir(Path::new("cyto"), &ScanConfig::default()).unwrap();
        let onco = parse_onco_dir(Path::new("onco"), &ScanConfig::default()).unwrap();

        let cel = cyto.column("CEL").unwrap()[0].unwrap().to_string();
        assert!(Path::new(&cel).is_absolute());
        assert_eq!(cel, path_of(&cwd.join("cyto"), "s1.CEL"));

        let at = onco.column("ATChannelCel").unwrap()[0].unwrap().to_string();
        let gc = onco.column("GCChannelCel").unwrap()[0].unwrap().to_string();
        assert!(Path::new(&at).is_absolute());
        assert!(Path::new(&gc).is_absolute());
        assert_eq!(at, path_of(&cwd.join("onco"), "P1_A.CEL"));
        assert_eq!(gc, path_of(&cwd.join("onco"), "P1_C.CEL"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_cyto_dir(&dir.path().join("missing"), &ScanConfig::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PrepError>(),
            Some(PrepError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_empty_directory_yields_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = parse_onco_dir(dir.path(), &ScanConfig::default()).unwrap();

        assert!(manifest.is_empty());
        assert!(manifest.columns().is_empty());
    }
}
