use serde::{Deserialize, Serialize};
use std::fmt;

/// One-based position within a compared sequence.
pub type Position = usize;

/// A single record parsed from FASTA text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Human readable label used when offering records for selection
    pub fn label(&self) -> String {
        let header = if self.header.is_empty() {
            "(untitled)"
        } else {
            self.header.as_str()
        };
        format!("{} ({} bp)", header, self.len())
    }
}

/// A sequence restricted to uppercase A/T/C/G.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSequence {
    pub cleaned: String,
    /// Set when normalization dropped characters (length changed)
    pub was_modified: bool,
}

impl NormalizedSequence {
    pub fn len(&self) -> usize {
        self.cleaned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }
}

/// A single-position base substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mutation {
    pub position: Position,
    pub from: char,
    pub to: char,
}

impl Mutation {
    pub fn new(position: Position, from: char, to: char) -> Self {
        Self { position, from, to }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}: {} → {}", self.position, self.from, self.to)
    }
}

/// A base in a rendered sequence, flagged when it differs from the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedBase {
    pub base: char,
    pub mutated: bool,
}

impl HighlightedBase {
    pub fn plain(base: char) -> Self {
        Self { base, mutated: false }
    }

    pub fn mutated(base: char) -> Self {
        Self { base, mutated: true }
    }
}
