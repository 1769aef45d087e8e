//! dnadiff Core Library
//!
//! FASTA parsing, sequence normalization, positional diffing, impact
//! annotation and report export for pairwise DNA comparison.

pub mod types;
pub mod error;
pub mod fasta;
pub mod normalize;
pub mod diff;
pub mod impact;
pub mod export;
pub mod compare;

// Re-export commonly used types and functions
pub use types::{FastaRecord, HighlightedBase, Mutation, NormalizedSequence};
pub use error::{InputError, InputSide};
pub use fasta::FastaParser;
pub use normalize::SequenceNormalizer;
pub use diff::{DiffOutcome, MutationDiffEngine};
pub use impact::{ImpactAnnotator, KnownImpact, IMPACT_DISCLAIMER, KNOWN_IMPACTS, LARGE_MUTATION_NOTE};
pub use export::{ExportPayload, ReportExporter};
pub use compare::{check_file_size, compare, validate_inputs, ComparisonResult, ValidatedPair, ValidationOutcome, DEFAULT_MAX_FILE_SIZE};

/// Version information for the dnadiff core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
