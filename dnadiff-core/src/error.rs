//! Input validation errors
//!
//! Every variant is recoverable by correcting the input; none of them are
//! raised by the pure pipeline functions, they are returned as values.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which of the two compared inputs a condition refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputSide {
    First,
    Second,
    Both,
}

impl InputSide {
    /// Combine per-side emptiness into a side, if any side is empty
    pub fn from_flags(first: bool, second: bool) -> Option<Self> {
        match (first, second) {
            (true, true) => Some(InputSide::Both),
            (true, false) => Some(InputSide::First),
            (false, true) => Some(InputSide::Second),
            (false, false) => None,
        }
    }
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::First => write!(f, "first sequence"),
            InputSide::Second => write!(f, "second sequence"),
            InputSide::Both => write!(f, "both sequences"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No valid DNA in {side} (only A, T, C, G are allowed)")]
    EmptyInput { side: InputSide },

    #[error("Sequences must have the same length (first: {first}, second: {second})")]
    LengthMismatch { first: usize, second: usize },

    #[error("No sequences found in FASTA input")]
    NoFastaRecords,

    #[error("File is {size} bytes, exceeding the {limit} byte limit")]
    OversizedFile { size: u64, limit: u64 },
}
