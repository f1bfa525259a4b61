//! Sample records and the tabular design built from them.
//!
//! Records are kept in insertion order keyed by a filename-derived
//! identifier. A `Manifest` is the table view over them: one row per
//! distinct key, columns as the union of record keys in first-seen order.

use config::{tsv_writer, PrepError};
use hashbrown::{HashMap, HashSet};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// ordered column -> value mapping for a single sample
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    fields: Vec<(String, String)>,
}

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// set a column, replacing its value in place if already present
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, column: K, value: V) {
        let column = column.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, column: K, value: V) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// insertion-ordered sample key -> record mapping
///
/// Inserting an existing key replaces its record but keeps the
/// position of the first insertion.
#[derive(Debug, Clone, Default)]
pub struct SampleMap {
    index: HashMap<String, usize>,
    records: Vec<(String, SampleRecord)>,
}

impl SampleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>>(&mut self, key: K, record: SampleRecord) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&idx) => {
                log::warn!("WARN: duplicated sample key {}, keeping the last one", key);
                self.records[idx].1 = record;
            }
            None => {
                self.index.insert(key.clone(), self.records.len());
                self.records.push((key, record));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SampleRecord)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut SampleRecord)> {
        self.records.iter_mut().map(|(k, r)| (k.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// the design table written for the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Manifest {
    /// Assemble a table from records: rows follow the map order and
    /// columns are the union of record keys in first-seen order.
    pub fn from_records(samples: SampleMap) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (_, record) in samples.iter() {
            for (column, _) in record.iter() {
                if !positions.contains_key(column) {
                    positions.insert(column.to_string(), columns.len());
                    columns.push(column.to_string());
                }
            }
        }

        let rows = samples
            .iter()
            .map(|(_, record)| {
                let mut row = vec![None; columns.len()];
                for (column, value) in record.iter() {
                    row[positions[column]] = Some(value.to_string());
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// values of a single column, top to bottom
    pub fn column(&self, column: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.position(column)?;
        Some(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }

    /// replace every missing cell with `sentinel`
    pub fn fill_missing(&mut self, sentinel: &str) {
        self.rows
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .filter(|cell| cell.is_none())
            .for_each(|cell| *cell = Some(sentinel.to_string()));
    }

    /// Drop every column holding the same value on all rows and
    /// return the names of the dropped columns.
    ///
    /// On a single-row table every column is constant; `identity`
    /// columns are kept there so the row still names its sample.
    pub fn prune_constant_columns(&mut self, identity: &[&str]) -> Vec<String> {
        let single = self.rows.len() < 2;

        let keep: Vec<bool> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                if single && identity.contains(&column.as_str()) {
                    return true;
                }
                let values: HashSet<Option<&str>> =
                    self.rows.iter().map(|row| row[idx].as_deref()).collect();
                values.len() > 1
            })
            .collect();

        let dropped = self
            .columns
            .iter()
            .zip(keep.iter())
            .filter(|(_, keep)| !**keep)
            .map(|(c, _)| c.clone())
            .collect::<Vec<_>>();

        if dropped.is_empty() {
            return dropped;
        }

        log::info!("INFO: dropping non-discriminating columns: {:?}", dropped);
        self.columns = retain_by_mask(std::mem::take(&mut self.columns), &keep);
        self.rows = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| retain_by_mask(row, &keep))
            .collect();

        dropped
    }

    fn missing_column<'a>(&self, columns: &[&'a str]) -> Option<&'a str> {
        columns.iter().copied().find(|c| self.position(c).is_none())
    }

    /// project the table onto `columns`, in that order
    pub fn select(&self, columns: &[&str]) -> Result<Manifest, PrepError> {
        if let Some(column) = self.missing_column(columns) {
            return Err(PrepError::MissingExpectedColumn(column.to_string()));
        }

        let positions = columns
            .iter()
            .filter_map(|c| self.position(c))
            .collect::<Vec<_>>();

        let rows = self
            .rows
            .iter()
            .map(|row| positions.iter().map(|&idx| row[idx].clone()).collect())
            .collect();

        Ok(Manifest {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// Project onto `columns`, returning the whole table untouched
    /// when any of them is missing.
    pub fn select_or_all(self, columns: &[&str]) -> Manifest {
        match self.select(columns) {
            Ok(selected) => selected,
            Err(PrepError::MissingExpectedColumn(column)) => {
                log::debug!("DEBUG: column {} not found, keeping all columns", column);
                self
            }
            Err(e) => {
                log::warn!("WARN: {}, keeping all columns", e);
                self
            }
        }
    }

    /// write a header row and one tab-separated row per sample
    pub fn write_tsv<W: Write>(&self, sink: W) -> Result<(), PrepError> {
        if self.columns.is_empty() {
            log::warn!("WARN: no samples found, the design will be empty");
            return Ok(());
        }

        let mut writer = tsv_writer(sink);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn write_to(&self, path: &Path) -> Result<(), PrepError> {
        log::info!("INFO: writing {} samples to {}", self.len(), path.display());
        let writer = BufWriter::new(File::create(path)?);
        self.write_tsv(writer)
    }

    /// first `n` rows, header included, for logging
    pub fn preview(&self, n: usize) -> String {
        let mut lines = vec![self.columns.join("\t")];
        lines.extend(self.rows.iter().take(n).map(|row| {
            row.iter()
                .map(|cell| cell.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join("\t")
        }));

        lines.join("\n")
    }
}

fn retain_by_mask<T>(items: Vec<T>, mask: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(mask.iter())
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(manifest: &Manifest) -> String {
        let mut bytes = Vec::new();
        manifest.write_tsv(&mut bytes).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_columns_follow_first_appearance() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("x", "1").with("y", "2"));
        samples.insert("b", SampleRecord::new().with("z", "3").with("x", "4"));

        let manifest = Manifest::from_records(samples);

        assert_eq!(manifest.columns(), ["x", "y", "z"]);
        assert_eq!(manifest.column("y").unwrap(), vec![Some("2"), None]);
        assert_eq!(manifest.column("z").unwrap(), vec![None, Some("3")]);
    }

    #[test]
    fn test_reinserted_key_keeps_position() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("x", "1"));
        samples.insert("b", SampleRecord::new().with("x", "2"));
        samples.insert("a", SampleRecord::new().with("x", "3"));

        let manifest = Manifest::from_records(samples);

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.column("x").unwrap(), vec![Some("3"), Some("2")]);
    }

    #[test]
    fn test_fill_then_prune() {
        let mut samples = SampleMap::new();
        samples.insert(
            "a",
            SampleRecord::new()
                .with("id", "a")
                .with("Condition_0", "ctrl")
                .with("Condition_1", "rep1"),
        );
        samples.insert(
            "b",
            SampleRecord::new().with("id", "b").with("Condition_0", "ctrl"),
        );

        let mut manifest = Manifest::from_records(samples);
        manifest.fill_missing("Empty");
        let dropped = manifest.prune_constant_columns(&["id"]);

        assert_eq!(dropped, vec!["Condition_0".to_string()]);
        assert_eq!(manifest.columns(), ["id", "Condition_1"]);
        assert_eq!(
            manifest.column("Condition_1").unwrap(),
            vec![Some("rep1"), Some("Empty")]
        );
    }

    #[test]
    fn test_single_row_keeps_only_identity_columns() {
        let mut samples = SampleMap::new();
        samples.insert(
            "a",
            SampleRecord::new()
                .with("id", "a")
                .with("f", "a.fq")
                .with("Condition_0", "ctrl"),
        );

        let mut manifest = Manifest::from_records(samples);
        let dropped = manifest.prune_constant_columns(&["id", "f"]);

        assert_eq!(dropped, vec!["Condition_0".to_string()]);
        assert_eq!(manifest.columns(), ["id", "f"]);
        assert_eq!(manifest.column("f").unwrap(), vec![Some("a.fq")]);
    }

    #[test]
    fn test_identity_columns_are_pruned_when_constant_across_rows() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("id", "s").with("f", "a.fq"));
        samples.insert("b", SampleRecord::new().with("id", "s").with("f", "b.fq"));

        let mut manifest = Manifest::from_records(samples);

        assert_eq!(manifest.prune_constant_columns(&["id", "f"]), vec!["id".to_string()]);
        assert_eq!(manifest.columns(), ["f"]);
    }

    #[test]
    fn test_select_or_all_projects_when_complete() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("x", "1").with("y", "2"));

        let manifest = Manifest::from_records(samples).select_or_all(&["y"]);

        assert_eq!(manifest.columns(), ["y"]);
    }

    #[test]
    fn test_select_missing_column_falls_back() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("id", "a").with("cel", "/a"));
        let manifest = Manifest::from_records(samples);

        assert!(matches!(
            manifest.select(&["id", "cel", "Project"]),
            Err(PrepError::MissingExpectedColumn(c)) if c == "Project"
        ));

        let all = manifest.clone().select_or_all(&["id", "cel", "Project"]);
        assert_eq!(all, manifest);
    }

    #[test]
    fn test_select_reorders_columns() {
        let mut samples = SampleMap::new();
        samples.insert(
            "a",
            SampleRecord::new()
                .with("cel", "/a")
                .with("Project", "Safir")
                .with("id", "a"),
        );
        let manifest = Manifest::from_records(samples).select_or_all(&["id", "cel", "Project"]);

        assert_eq!(manifest.columns(), ["id", "cel", "Project"]);
        assert_eq!(render(&manifest), "id\tcel\tProject\na\t/a\tSafir\n");
    }

    #[test]
    fn test_missing_cells_are_written_empty() {
        let mut samples = SampleMap::new();
        samples.insert("a", SampleRecord::new().with("x", "1"));
        samples.insert("b", SampleRecord::new().with("y", "2"));

        assert_eq!(
            render(&Manifest::from_records(samples)),
            "x\ty\n1\t\n\t2\n"
        );
    }

    #[test]
    fn test_empty_manifest_writes_nothing() {
        assert_eq!(render(&Manifest::from_records(SampleMap::new())), "");
    }

    #[test]
    fn test_record_insert_replaces_in_place() {
        let mut record = SampleRecord::new().with("a", "1").with("b", "2");
        record.insert("a", "3");

        assert_eq!(record.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.len(), 2);
    }
}
