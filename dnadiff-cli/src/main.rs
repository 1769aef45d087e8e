use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod commands;
mod error;
mod render;
mod session;

use config::Config;
use commands::compare::{InputArgs, OutputArgs};
use error::{print_error_and_exit, CliError, CliResult};

#[derive(Parser)]
#[command(name = "dnadiff")]
#[command(about = "dnadiff - positional DNA sequence comparison")]
#[command(version)]
#[command(long_about = "
dnadiff compares two equal-length DNA sequences base by base and reports
substitutions, with illustrative notes for a few known positions.

Examples:
  dnadiff compare --first-seq ATCG --second-seq ATTG
  dnadiff compare --first-fasta a.fa --first-record 2 --second-fasta b.fa --export
  dnadiff records --fasta a.fa
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two sequences and list their substitutions
    Compare {
        #[command(flatten)]
        first: FirstInput,

        #[command(flatten)]
        second: SecondInput,

        /// Write a dated mutation report
        #[arg(long)]
        export: bool,

        /// Directory for the report (overrides output.export_dir)
        #[arg(long, requires = "export")]
        export_dir: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Disable coloured highlighting
        #[arg(long)]
        no_color: bool,
    },

    /// List the records of a FASTA file
    Records {
        /// FASTA file to inspect
        #[arg(long, required = true)]
        fasta: PathBuf,
    },

    /// Configuration helpers
    Config {
        /// Print an example dnadiff.toml
        #[arg(long)]
        example: bool,
    },
}

#[derive(Args)]
pub struct FirstInput {
    /// First sequence as text
    #[arg(long, conflicts_with = "first_fasta")]
    pub first_seq: Option<String>,

    /// FASTA file holding the first sequence
    #[arg(long)]
    pub first_fasta: Option<PathBuf>,

    /// Record number within --first-fasta (1-based)
    #[arg(long, default_value = "1", requires = "first_fasta")]
    pub first_record: usize,
}

#[derive(Args)]
pub struct SecondInput {
    /// Second sequence as text
    #[arg(long, conflicts_with = "second_fasta")]
    pub second_seq: Option<String>,

    /// FASTA file holding the second sequence
    #[arg(long)]
    pub second_fasta: Option<PathBuf>,

    /// Record number within --second-fasta (1-based)
    #[arg(long, default_value = "1", requires = "second_fasta")]
    pub second_record: usize,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Compare {
            first,
            second,
            export,
            export_dir,
            json,
            no_color,
        } => {
            commands::compare::execute(
                &config,
                InputArgs {
                    seq: first.first_seq,
                    fasta: first.first_fasta,
                    record: first.first_record,
                },
                InputArgs {
                    seq: second.second_seq,
                    fasta: second.second_fasta,
                    record: second.second_record,
                },
                OutputArgs {
                    export,
                    export_dir,
                    json,
                    no_color,
                },
            )?;
        }

        Commands::Records { fasta } => {
            commands::records::execute(&config, fasta)?;
        }

        Commands::Config { example } => {
            if !example {
                return Err(CliError::config("nothing to do; pass --example"));
            }
            println!("{}", Config::example_toml()?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        print_error_and_exit(&err);
    }
}
