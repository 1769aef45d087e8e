//! Terminal formatting for comparison results

use crossterm::style::Stylize;
use dnadiff_core::{ComparisonResult, HighlightedBase};

/// Render highlighted bases in lines of `width`, marking mutated bases with
/// colour or, without colour, surrounding brackets.
pub fn highlight_lines(bases: &[HighlightedBase], width: usize, color: bool) -> Vec<String> {
    bases
        .chunks(width.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| match (b.mutated, color) {
                    (false, _) => b.base.to_string(),
                    (true, true) => b.base.red().bold().to_string(),
                    (true, false) => format!("[{}]", b.base),
                })
                .collect()
        })
        .collect()
}

pub fn format_result(result: &ComparisonResult, width: usize, color: bool) -> String {
    let mut out = Vec::new();

    out.push(format!("Source: {}", result.source));
    out.push(format!("Sequence length: {} bp", result.first_length));
    if result.stripped_characters() {
        out.push("Note: non-ATCG characters were removed before comparing.".to_string());
    }

    if !result.has_mutations() {
        out.push("No mutations found: the sequences are identical.".to_string());
        return out.join("\n");
    }

    out.push(format!(
        "Mutations found: {} ({:.2}% identity)",
        result.mutations.len(),
        result.identity_percent()
    ));
    out.push(String::new());
    for mutation in &result.mutations {
        out.push(format!("  {}", mutation));
    }

    out.push(String::new());
    out.push("Sequence 1:".to_string());
    out.extend(highlight_lines(&result.highlighted_first, width, color));
    out.push("Sequence 2:".to_string());
    out.extend(highlight_lines(&result.highlighted_second, width, color));

    if let Some(implications) = result.implications() {
        out.push(String::new());
        out.push("Potential implications:".to_string());
        if let Some((disclaimer, notes)) = implications.split_last() {
            for note in notes {
                out.push(format!("  - {}", note));
            }
            out.push(format!("  {}", disclaimer));
        }
    }

    out.join("\n")
}
