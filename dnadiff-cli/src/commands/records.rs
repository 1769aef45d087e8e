//! Records command implementation - list the records of a FASTA file

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CliResult;
use crate::session::load_fasta;

pub fn execute(config: &Config, fasta: PathBuf) -> CliResult<()> {
    for line in record_listing(config, &fasta)? {
        println!("{}", line);
    }
    Ok(())
}

fn record_listing(config: &Config, fasta: &Path) -> CliResult<Vec<String>> {
    let records = load_fasta(fasta, config.input.max_file_size)?;
    Ok(records
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>4}  {}", i + 1, record.label()))
        .collect())
}
