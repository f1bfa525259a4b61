use config::{
    A_CHANNEL_SUFFIX, C_CHANNEL_SUFFIX, MATCHR, MOSCATO, PATHMOL, READ_MARKERS, SAFIR,
};

use std::path::Path;

/// file name minus its final extension
pub fn sample_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// file name as an owned string
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// sample id of an OncoScan A channel stem: the channel marker
/// (last two characters) is stripped
pub fn channel_sample_id(stem: &str) -> String {
    let keep = stem.chars().count().saturating_sub(2);
    stem.chars().take(keep).collect()
}

/// C channel path paired with an A channel path
///
/// Plain textual substitution: any other "A.CEL" in the path is
/// rewritten as well.
pub fn c_channel_path(a_path: &str) -> String {
    a_path.replace(A_CHANNEL_SUFFIX, C_CHANNEL_SUFFIX)
}

/// project label inferred from a CEL file name prefix
pub fn guess_project(name: &str) -> &'static str {
    if name.starts_with(MATCHR.0) {
        MATCHR.1
    } else if name.starts_with(MOSCATO.0) {
        MOSCATO.1
    } else if SAFIR.0.iter().any(|prefix| name.starts_with(prefix)) {
        SAFIR.1
    } else {
        PATHMOL
    }
}

/// Guess experimental conditions from a FASTQ name.
///
/// Read markers and extensions (R1, R2, fastq, gz) are removed from
/// the dot-separated segments, then the name is split on underscores
/// and its first field, usually the sample id, is discarded.
///
/// Tokens borrow from the cleaned name built here, so they are
/// collected as owned strings before the iterator is returned.
///
/// ```
/// use prep_design::utils::guess_conditions;
///
/// let conditions: Vec<String> = guess_conditions("001_TreatmentA_Rep1.R1.fastq.gz").collect();
/// assert_eq!(conditions, vec!["TreatmentA", "Rep1"]);
/// ```
pub fn guess_conditions(name: &str) -> impl Iterator<Item = String> {
    let cleaned = name
        .split('.')
        .filter(|segment| !READ_MARKERS.contains(segment))
        .collect::<Vec<_>>()
        .join(".");

    cleaned
        .split('_')
        .skip(1)
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .into_iter()
}

/// longest common prefix of two strings, by character
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));

    &a[..end]
}

/// sample id shared by two mates: their common prefix without
/// surrounding underscores
pub fn paired_sample_id(upstream: &str, downstream: &str) -> String {
    common_prefix(upstream, downstream)
        .trim_matches('_')
        .to_string()
}
