//! Positional substitution diff
//!
//! Compares two equal-length sequences base by base. There is no alignment:
//! a mutation is a mismatch at the same index on both sides.

use serde::Serialize;

use crate::types::{HighlightedBase, Mutation};

/// Output of a single diff run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffOutcome {
    /// Substitutions in ascending position order
    pub mutations: Vec<Mutation>,
    pub highlighted_first: Vec<HighlightedBase>,
    pub highlighted_second: Vec<HighlightedBase>,
}

impl DiffOutcome {
    pub fn is_identical(&self) -> bool {
        self.mutations.is_empty()
    }
}

pub struct MutationDiffEngine;

impl MutationDiffEngine {
    /// Diff two sequences of equal length.
    ///
    /// Callers are expected to reject length mismatches up front; if the
    /// lengths differ anyway only the common prefix length is compared.
    pub fn diff(first: &str, second: &str) -> DiffOutcome {
        let capacity = first.len().min(second.len());
        let mut mutations = Vec::new();
        let mut highlighted_first = Vec::with_capacity(capacity);
        let mut highlighted_second = Vec::with_capacity(capacity);

        for (i, (a, b)) in first.chars().zip(second.chars()).enumerate() {
            if a != b {
                mutations.push(Mutation::new(i + 1, a, b));
                highlighted_first.push(HighlightedBase::mutated(a));
                highlighted_second.push(HighlightedBase::mutated(b));
            } else {
                highlighted_first.push(HighlightedBase::plain(a));
                highlighted_second.push(HighlightedBase::plain(b));
            }
        }

        log::debug!("Diffed {} positions, {} mutations", highlighted_first.len(), mutations.len());

        DiffOutcome {
            mutations,
            highlighted_first,
            highlighted_second,
        }
    }
}
