//! Multi-record FASTA text parser
//!
//! Turns FASTA text into an ordered list of records. The parser is lenient:
//! it never fails and performs no alphabet validation, leaving that to the
//! normalizer.

use crate::error::InputError;
use crate::types::FastaRecord;

/// FASTA parser for in-memory text
pub struct FastaParser;

impl FastaParser {
    /// Parse FASTA text into records, in input order.
    ///
    /// Sequence lines are trimmed and concatenated without separators. A
    /// record is only emitted once it has accumulated sequence, so a header
    /// directly followed by another header is dropped. Text before the first
    /// header belongs to no record and is discarded.
    pub fn parse(text: &str) -> Vec<FastaRecord> {
        let mut records = Vec::new();
        let mut current_header: Option<String> = None;
        let mut current_seq = String::new();

        for line in text.split('\n') {
            if let Some(header) = line.strip_prefix('>') {
                Self::flush(&mut records, current_header.take(), &mut current_seq);
                current_header = Some(header.trim().to_string());
            } else if current_header.is_some() {
                current_seq.push_str(line.trim());
            } else if !line.trim().is_empty() {
                log::debug!("Ignoring FASTA text before the first header: {}", line.trim());
            }
        }

        Self::flush(&mut records, current_header, &mut current_seq);

        log::debug!("Parsed {} FASTA records", records.len());
        records
    }

    /// Parse FASTA text, treating an empty result as an input error
    pub fn parse_nonempty(text: &str) -> Result<Vec<FastaRecord>, InputError> {
        let records = Self::parse(text);
        if records.is_empty() {
            Err(InputError::NoFastaRecords)
        } else {
            Ok(records)
        }
    }

    fn flush(records: &mut Vec<FastaRecord>, header: Option<String>, sequence: &mut String) {
        let Some(header) = header else {
            return;
        };
        if sequence.is_empty() {
            log::debug!("Dropping FASTA header without sequence: {}", header);
            return;
        }
        records.push(FastaRecord::new(header, sequence.trim()));
        sequence.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_records() {
        let records = FastaParser::parse(">h1\nAT\nCG\n>h2\nGG");

        assert_eq!(
            records,
            vec![FastaRecord::new("h1", "ATCG"), FastaRecord::new("h2", "GG")]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(FastaParser::parse("").is_empty());
    }

    #[test]
    fn test_header_text_is_trimmed() {
        let records = FastaParser::parse(">  seq1 description  \r\nACGT\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, "seq1 description");
        assert_eq!(records[0].sequence, "ACGT");
    }

    #[test]
    fn test_sequence_lines_are_trimmed_and_joined() {
        let records = FastaParser::parse(">s\n  AC GT \n\tTT\n\n");
        assert_eq!(records[0].sequence, "AC GTTT");
    }

    #[test]
    fn test_header_without_sequence_is_dropped() {
        let records = FastaParser::parse(">empty\n>full\nACGT\n>trailing\n");
        assert_eq!(records, vec![FastaRecord::new("full", "ACGT")]);
    }

    #[test]
    fn test_headerless_text_yields_no_records() {
        assert!(FastaParser::parse("ACGT\nACGT\n").is_empty());
        assert_eq!(FastaParser::parse_nonempty("ACGT"), Err(InputError::NoFastaRecords));
    }

    #[test]
    fn test_text_before_first_header_is_discarded() {
        let records = FastaParser::parse("AAA\n>h1\nCCC\n");
        assert_eq!(records, vec![FastaRecord::new("h1", "CCC")]);
    }

    #[test]
    fn test_bare_marker_is_a_header() {
        let records = FastaParser::parse(">\nACGT\n");
        assert_eq!(records, vec![FastaRecord::new("", "ACGT")]);
    }

    #[test]
    fn test_non_dna_characters_are_preserved() {
        let records = FastaParser::parse(">prot\nMKV*-xyz\n");
        assert_eq!(records[0].sequence, "MKV*-xyz");
    }

    #[test]
    fn test_parse_nonempty() {
        assert_eq!(
            FastaParser::parse_nonempty(">only header\n"),
            Err(InputError::NoFastaRecords)
        );
        assert_eq!(FastaParser::parse_nonempty(">a\nA").map(|r| r.len()), Ok(1));
    }
}
