use anyhow::Result;
use config::{
    validate_dir, CONDITION_PREFIX, DOWNSTREAM_FILE, EMPTY, FASTQ_PATTERN, FASTQ_SAMPLE,
    UPSTREAM_FILE,
};
use regex::Regex;

use std::path::{Path, PathBuf};

use crate::core::ScanConfig;
use crate::manifest::{Manifest, SampleMap, SampleRecord};
use crate::utils::{file_name, guess_conditions, paired_sample_id, sample_stem};

/// non-directory entries under `dir` named like FASTQ files, sorted
/// lexicographically by path
pub fn fastq_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_dir(dir)?;
    let pattern = Regex::new(FASTQ_PATTERN)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() || !pattern.is_match(&file_name(&path)) {
            continue;
        }
        files.push(path);
    }
    files.sort();

    log::info!("INFO: {} FASTQ files found in {}", files.len(), dir.display());
    Ok(files)
}

/// append numbered condition columns guessed from each sample key
fn add_conditions(samples: &mut SampleMap) {
    for (key, record) in samples.iter_mut() {
        for (idx, condition) in guess_conditions(key).enumerate() {
            record.insert(format!("{CONDITION_PREFIX}{idx}"), condition);
        }
    }
}

fn assemble(mut samples: SampleMap, config: &ScanConfig) -> Manifest {
    if config.guess_conditions {
        add_conditions(&mut samples);
    }

    let mut manifest = Manifest::from_records(samples);
    manifest.fill_missing(EMPTY);
    manifest.prune_constant_columns(&[FASTQ_SAMPLE, UPSTREAM_FILE, DOWNSTREAM_FILE]);

    manifest
}

/// Build a design from single-end FASTQ files, one row per file
pub fn parse_fastq_dir_single(dir: &Path, config: &ScanConfig) -> Result<Manifest> {
    log::info!("INFO: FASTQ single-end path identified as: {}", dir.display());

    let mut samples = SampleMap::new();
    for path in fastq_files(dir)? {
        let stem = sample_stem(&path);
        let record = SampleRecord::new()
            .with(FASTQ_SAMPLE, stem.as_str())
            .with(UPSTREAM_FILE, path.display().to_string());

        samples.insert(stem, record);
    }

    Ok(assemble(samples, config))
}

/// Build a design from paired-end FASTQ files
///
/// Mates are expected to sort next to each other, upstream first:
/// files are paired by position (0 with 1, 2 with 3, ...) without
/// further checks. A trailing unpaired file is ignored.
pub fn parse_fastq_dir_pair(dir: &Path, config: &ScanConfig) -> Result<Manifest> {
    log::info!("INFO: FASTQ paired-end path identified as: {}", dir.display());

    let files = fastq_files(dir)?;
    if files.len() % 2 != 0 {
        log::warn!(
            "WARN: odd number of FASTQ files, {} has no mate and is skipped",
            files[files.len() - 1].display()
        );
    }

    let mut samples = SampleMap::new();
    for mates in files.chunks_exact(2) {
        let (upstream, downstream) = (&mates[0], &mates[1]);
        let (up_stem, down_stem) = (sample_stem(upstream), sample_stem(downstream));

        let record = SampleRecord::new()
            .with(FASTQ_SAMPLE, paired_sample_id(&up_stem, &down_stem))
            .with(UPSTREAM_FILE, upstream.display().to_string())
            .with(DOWNSTREAM_FILE, downstream.display().to_string());

        samples.insert(up_stem, record);
    }

    Ok(assemble(samples, config))
}
