//! Comparison pipeline
//!
//! Ties normalization, validation, diffing and annotation together into a
//! single [`ComparisonResult`]. All functions here are pure; abnormal
//! conditions come back as [`InputError`] values.

use serde::Serialize;

use crate::diff::MutationDiffEngine;
use crate::error::{InputError, InputSide};
use crate::impact::{ImpactAnnotator, IMPACT_DISCLAIMER};
use crate::normalize::SequenceNormalizer;
use crate::types::{HighlightedBase, Mutation, NormalizedSequence};

/// Suggested ceiling for FASTA files read by the acquisition layer (5 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Both inputs normalized and checked, ready to diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPair {
    pub first: NormalizedSequence,
    pub second: NormalizedSequence,
}

pub type ValidationOutcome = Result<ValidatedPair, InputError>;

/// Normalize both raw inputs and decide whether they can be compared
pub fn validate_inputs(first: &str, second: &str) -> ValidationOutcome {
    let first = SequenceNormalizer::normalize(first);
    let second = SequenceNormalizer::normalize(second);

    if let Some(side) = InputSide::from_flags(first.is_empty(), second.is_empty()) {
        return Err(InputError::EmptyInput { side });
    }

    if first.len() != second.len() {
        return Err(InputError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    Ok(ValidatedPair { first, second })
}

/// Reject files above `limit` bytes before they are read
pub fn check_file_size(size: u64, limit: u64) -> Result<(), InputError> {
    if size > limit {
        Err(InputError::OversizedFile { size, limit })
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Where the sequences came from, e.g. "Manual input"
    pub source: String,
    pub first_length: usize,
    pub second_length: usize,
    pub first_was_modified: bool,
    pub second_was_modified: bool,
    pub mutations: Vec<Mutation>,
    pub highlighted_first: Vec<HighlightedBase>,
    pub highlighted_second: Vec<HighlightedBase>,
    pub notes: Vec<String>,
}

impl ComparisonResult {
    pub fn has_mutations(&self) -> bool {
        !self.mutations.is_empty()
    }

    /// Whether normalization removed characters from either input
    pub fn stripped_characters(&self) -> bool {
        self.first_was_modified || self.second_was_modified
    }

    /// Percentage of positions that are unchanged
    pub fn identity_percent(&self) -> f64 {
        if self.first_length == 0 {
            return 100.0;
        }
        let unchanged = self.first_length - self.mutations.len();
        unchanged as f64 / self.first_length as f64 * 100.0
    }

    /// Notes followed by the disclaimer, or `None` when there is nothing to show
    pub fn implications(&self) -> Option<Vec<&str>> {
        if self.notes.is_empty() {
            return None;
        }
        let mut lines: Vec<&str> = self.notes.iter().map(String::as_str).collect();
        lines.push(IMPACT_DISCLAIMER);
        Some(lines)
    }
}

/// Run the full comparison over two raw inputs
pub fn compare(source: &str, first: &str, second: &str) -> Result<ComparisonResult, InputError> {
    let ValidatedPair { first, second } = validate_inputs(first, second)?;
    log::info!("Comparing {} bp sequences from {}", first.len(), source);

    let outcome = MutationDiffEngine::diff(&first.cleaned, &second.cleaned);
    let notes = ImpactAnnotator::annotate(&outcome.mutations);
    log::info!("Found {} mutations, {} notes", outcome.mutations.len(), notes.len());

    Ok(ComparisonResult {
        source: source.to_string(),
        first_length: first.len(),
        second_length: second.len(),
        first_was_modified: first.was_modified,
        second_was_modified: second.was_modified,
        mutations: outcome.mutations,
        highlighted_first: outcome.highlighted_first,
        highlighted_second: outcome.highlighted_second,
        notes,
    })
}
