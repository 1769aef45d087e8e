//! Illustrative impact notes for known substitutions
//!
//! The knowledge table is a fixed demonstration set and carries no
//! scientific meaning.

use serde::Serialize;

use crate::types::{Mutation, Position};

/// More mutations than this triggers [`LARGE_MUTATION_NOTE`]
pub const LARGE_MUTATION_THRESHOLD: usize = 10;

pub const LARGE_MUTATION_NOTE: &str =
    "Large number of mutations detected - this may indicate significant genetic variation.";

/// Shown after the notes whenever any note is presented
pub const IMPACT_DISCLAIMER: &str =
    "These implications are illustrative only and must not be used for medical or scientific decisions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownImpact {
    pub position: Position,
    pub from: char,
    pub to: char,
    pub impact: &'static str,
}

impl KnownImpact {
    pub fn matches(&self, mutation: &Mutation) -> bool {
        self.position == mutation.position && self.from == mutation.from && self.to == mutation.to
    }
}

pub const KNOWN_IMPACTS: &[KnownImpact] = &[
    KnownImpact {
        position: 50,
        from: 'A',
        to: 'T',
        impact: "May affect protein folding (illustrative example)",
    },
    KnownImpact {
        position: 100,
        from: 'G',
        to: 'C',
        impact: "Possible change in gene expression (illustrative example)",
    },
    KnownImpact {
        position: 150,
        from: 'C',
        to: 'T',
        impact: "Potential splice-site disruption (illustrative example)",
    },
    KnownImpact {
        position: 200,
        from: 'T',
        to: 'G',
        impact: "Could alter a regulatory binding motif (illustrative example)",
    },
];

pub struct ImpactAnnotator;

impl ImpactAnnotator {
    /// Annotate against the built-in [`KNOWN_IMPACTS`] table
    pub fn annotate(mutations: &[Mutation]) -> Vec<String> {
        Self::annotate_with(mutations, KNOWN_IMPACTS)
    }

    /// Annotate against an arbitrary table.
    ///
    /// The threshold note comes first, then one note per (mutation, entry)
    /// match in mutation order and then table order.
    pub fn annotate_with(mutations: &[Mutation], table: &[KnownImpact]) -> Vec<String> {
        let mut notes = Vec::new();

        if mutations.len() > LARGE_MUTATION_THRESHOLD {
            notes.push(LARGE_MUTATION_NOTE.to_string());
        }

        for mutation in mutations {
            for entry in table.iter().filter(|entry| entry.matches(mutation)) {
                log::debug!("Known impact at {}: {}", mutation, entry.impact);
                notes.push(entry.impact.to_string());
            }
        }

        notes
    }
}
