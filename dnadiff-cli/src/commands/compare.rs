//! Compare command implementation - diff two sequences and optionally export

use std::path::{Path, PathBuf};

use dnadiff_core::{compare, ComparisonResult, ReportExporter};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::render::format_result;
use crate::session::{InputSlot, Session};

/// One side of the comparison as given on the command line
pub struct InputArgs {
    pub seq: Option<String>,
    pub fasta: Option<PathBuf>,
    pub record: usize,
}

pub struct OutputArgs {
    pub export: bool,
    pub export_dir: Option<PathBuf>,
    pub json: bool,
    pub no_color: bool,
}

pub fn execute(config: &Config, first: InputArgs, second: InputArgs, output: OutputArgs) -> CliResult<()> {
    let mut session = Session::new();
    fill_slot(&mut session.first, first, config)?;
    fill_slot(&mut session.second, second, config)?;

    let result = run(&session)?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let color = config.output.color && !output.no_color;
        println!("{}", format_result(&result, config.output.line_width, color));
    }

    if output.export {
        if !result.has_mutations() {
            log::warn!("No mutations to export");
            return Ok(());
        }
        let dir = output.export_dir.unwrap_or_else(|| config.output.export_dir.clone());
        let path = write_report(&result, &dir)?;
        log::info!("Report written to: {}", path.display());
    }

    Ok(())
}

fn fill_slot(slot: &mut InputSlot, args: InputArgs, config: &Config) -> CliResult<()> {
    match (args.seq, args.fasta) {
        (Some(text), None) => {
            slot.set_text(text);
            Ok(())
        }
        (None, Some(path)) => slot.set_fasta(&path, args.record, config.input.max_file_size),
        (None, None) => Ok(()),
        (Some(_), Some(_)) => Err(CliError::conflicting_input(
            "use either a sequence or a FASTA file for each input, not both",
        )),
    }
}

fn run(session: &Session) -> CliResult<ComparisonResult> {
    let (first, second) = session.raw_sequences()?;
    Ok(compare(&session.source_description(), first, second)?)
}

fn write_report(result: &ComparisonResult, dir: &Path) -> CliResult<PathBuf> {
    let payload = ReportExporter::export(&result.mutations);
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&payload.filename);
    std::fs::write(&path, payload.content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnadiff_core::InputError;

    fn text(seq: &str) -> InputArgs {
        InputArgs { seq: Some(seq.to_string()), fasta: None, record: 1 }
    }

    fn session_for(first: InputArgs, second: InputArgs) -> CliResult<Session> {
        let config = Config::default();
        let mut session = Session::new();
        fill_slot(&mut session.first, first, &config)?;
        fill_slot(&mut session.second, second, &config)?;
        Ok(session)
    }

    #[test]
    fn test_run_text_comparison() {
        let session = session_for(text("ATCG"), text("ATTG")).unwrap();
        let result = run(&session).unwrap();
        assert_eq!(result.mutations.len(), 1);
        assert_eq!(result.source, "Manual input");
    }

    #[test]
    fn test_length_mismatch_is_reported() {
        let session = session_for(text("ATCG"), text("ATC")).unwrap();
        let err = run(&session).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::LengthMismatch { first: 4, second: 3 })
        ));
    }

    #[test]
    fn test_both_sources_for_one_input() {
        let both = InputArgs {
            seq: Some("ACGT".to_string()),
            fasta: Some(PathBuf::from("x.fa")),
            record: 1,
        };
        assert!(matches!(
            session_for(both, text("ACGT")),
            Err(CliError::ConflictingInput { .. })
        ));
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_for(text("AAAA"), text("ACAT")).unwrap();
        let result = run(&session).unwrap();

        let path = write_report(&result, dir.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Position 2: A → C\nPosition 4: A → T");
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("dna_mutations_"));
    }
}
