//! Session state for one comparison request
//!
//! Each of the two inputs is either typed text or a record chosen from a
//! loaded FASTA file, never both.

use std::path::{Path, PathBuf};

use dnadiff_core::{check_file_size, FastaParser, FastaRecord};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default)]
pub enum InputSlot {
    #[default]
    Empty,
    Text(String),
    Fasta {
        path: PathBuf,
        records: Vec<FastaRecord>,
        /// Zero-based index into `records`
        selected: usize,
    },
}

impl InputSlot {
    /// The raw sequence this slot contributes to a comparison
    pub fn raw_sequence(&self) -> Option<&str> {
        match self {
            InputSlot::Empty => None,
            InputSlot::Text(text) => Some(text.as_str()),
            InputSlot::Fasta { records, selected, .. } => {
                records.get(*selected).map(|record| record.sequence.as_str())
            }
        }
    }

    /// Use typed text for a slot, discarding any loaded file
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = InputSlot::Text(text.into());
    }

    /// Load a FASTA file into a slot and select a record by 1-based number
    pub fn set_fasta(&mut self, path: &Path, record: usize, max_file_size: u64) -> CliResult<()> {
        // Failed loads leave the slot empty
        *self = InputSlot::Empty;
        let records = load_fasta(path, max_file_size)?;

        let count = records.len();
        if record == 0 || record > count {
            return Err(CliError::RecordOutOfRange {
                file: path.to_path_buf(),
                index: record,
                count,
            });
        }

        *self = InputSlot::Fasta {
            path: path.to_path_buf(),
            records,
            selected: record - 1,
        };
        Ok(())
    }

    fn describe(&self) -> String {
        match self {
            InputSlot::Empty => "nothing".to_string(),
            InputSlot::Text(_) => "manual input".to_string(),
            InputSlot::Fasta { path, records, selected } => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match records.get(*selected) {
                    Some(record) if !record.header.is_empty() => format!("{} [{}]", name, record.header),
                    _ => name,
                }
            }
        }
    }
}

/// Read and parse a FASTA file, enforcing the size ceiling before reading
pub fn load_fasta(path: &Path, max_file_size: u64) -> CliResult<Vec<FastaRecord>> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }

    let size = std::fs::metadata(path)?.len();
    check_file_size(size, max_file_size)
        .map_err(|err| CliError::file(path.to_path_buf(), err))?;

    let text = std::fs::read_to_string(path)?;
    let records = FastaParser::parse_nonempty(&text)
        .map_err(|err| CliError::file(path.to_path_buf(), err))?;

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub first: InputSlot,
    pub second: InputSlot,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw sequences for both slots, in order
    pub fn raw_sequences(&self) -> CliResult<(&str, &str)> {
        let first = self
            .first
            .raw_sequence()
            .ok_or_else(|| CliError::missing_input("provide --first-seq or --first-fasta"))?;
        let second = self
            .second
            .raw_sequence()
            .ok_or_else(|| CliError::missing_input("provide --second-seq or --second-fasta"))?;
        Ok((first, second))
    }

    /// Source line shown with the comparison result
    pub fn source_description(&self) -> String {
        match (&self.first, &self.second) {
            (InputSlot::Text(_), InputSlot::Text(_)) => "Manual input".to_string(),
            (first, second) => format!("{} vs {}", first.describe(), second.describe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fasta_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp fasta");
        write!(file, "{}", content).unwrap();
        file.as_file().sync_all().unwrap();
        file
    }

    #[test]
    fn test_text_inputs() {
        let mut session = Session::new();
        session.first.set_text("ATCG");
        session.second.set_text("ATTG");

        assert_eq!(session.raw_sequences().unwrap(), ("ATCG", "ATTG"));
        assert_eq!(session.source_description(), "Manual input");
    }

    #[test]
    fn test_missing_input() {
        let mut session = Session::new();
        session.first.set_text("ATCG");
        assert!(matches!(session.raw_sequences(), Err(CliError::MissingInput { .. })));
    }

    #[test]
    fn test_fasta_record_selection() {
        let file = fasta_file(">h1\nAT\nCG\n>h2\nGG\n");
        let mut session = Session::new();

        session.first.set_fasta(file.path(), 2, 1024).unwrap();
        session.second.set_text("GC");

        assert_eq!(session.raw_sequences().unwrap(), ("GG", "GC"));
        assert!(session.source_description().contains("[h2] vs manual input"));
    }

    #[test]
    fn test_text_replaces_loaded_file() {
        let file = fasta_file(">h1\nACGT\n");
        let mut session = Session::new();

        session.first.set_fasta(file.path(), 1, 1024).unwrap();
        session.first.set_text("TTTT");
        assert!(matches!(session.first, InputSlot::Text(_)));
    }

    #[test]
    fn test_record_out_of_range() {
        let file = fasta_file(">h1\nACGT\n");
        let mut session = Session::new();

        let err = session.first.set_fasta(file.path(), 3, 1024).unwrap_err();
        assert!(matches!(err, CliError::RecordOutOfRange { index: 3, count: 1, .. }));
        assert!(matches!(session.first, InputSlot::Empty));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let file = fasta_file(">h1\nACGTACGTACGT\n");
        let err = load_fasta(file.path(), 8).unwrap_err();
        assert!(matches!(
            err,
            CliError::File { source: dnadiff_core::InputError::OversizedFile { limit: 8, .. }, .. }
        ));
    }

    #[test]
    fn test_file_without_records() {
        let file = fasta_file(">header only\n");
        let err = load_fasta(file.path(), 1024).unwrap_err();
        assert!(matches!(
            err,
            CliError::File { source: dnadiff_core::InputError::NoFastaRecords, .. }
        ));
    }

    #[test]
    fn test_headerless_file_has_no_records() {
        let file = fasta_file("ACGTACGT\nACGT\n");
        let err = load_fasta(file.path(), 1024).unwrap_err();
        assert!(matches!(
            err,
            CliError::File { source: dnadiff_core::InputError::NoFastaRecords, .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_fasta(Path::new("/nonexistent/input.fa"), 1024).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }
}
