use crate::types::NormalizedSequence;

/// Bases kept by the normalizer
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'C', 'G'];

pub struct SequenceNormalizer;

impl SequenceNormalizer {
    /// Uppercase `raw` and drop everything outside A/T/C/G.
    ///
    /// `was_modified` reports a change in length only; pure case folding
    /// leaves it unset.
    pub fn normalize(raw: &str) -> NormalizedSequence {
        let cleaned: String = raw
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| DNA_ALPHABET.contains(c))
            .collect();

        let was_modified = cleaned.len() != raw.chars().count();
        if was_modified {
            log::debug!(
                "Normalization stripped {} characters",
                raw.chars().count() - cleaned.len()
            );
        }

        NormalizedSequence { cleaned, was_modified }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_and_uppercases() {
        let normalized = SequenceNormalizer::normalize("atcgXX");
        assert_eq!(normalized.cleaned, "ATCG");
        assert!(normalized.was_modified);
    }

    #[test]
    fn test_case_only_change_is_not_flagged() {
        let normalized = SequenceNormalizer::normalize("acgt");
        assert_eq!(normalized.cleaned, "ACGT");
        assert!(!normalized.was_modified);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let normalized = SequenceNormalizer::normalize(" \t\n ");
        assert!(normalized.is_empty());
        assert!(normalized.was_modified);
        assert!(SequenceNormalizer::normalize("").cleaned.is_empty());
    }

    #[test]
    fn test_ambiguity_codes_and_rna_are_removed() {
        let normalized = SequenceNormalizer::normalize("ACGUNRY-é");
        assert_eq!(normalized.cleaned, "ACG");
        assert!(normalized.was_modified);
    }
}
