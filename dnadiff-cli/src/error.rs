//! Error handling for dnadiff CLI

use dnadiff_core::InputError;
use thiserror::Error;
use std::path::PathBuf;

/// Main error type for dnadiff CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid input in {file}: {source}")]
    File { file: PathBuf, source: InputError },

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Record {index} requested from {file}, which has {count} records")]
    RecordOutOfRange { file: PathBuf, index: usize, count: usize },

    #[error("Missing input: {message}")]
    MissingInput { message: String },

    #[error("Conflicting input: {message}")]
    ConflictingInput { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn file(file: PathBuf, source: InputError) -> Self {
        Self::File { file, source }
    }

    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput { message: message.into() }
    }

    pub fn conflicting_input<S: Into<String>>(message: S) -> Self {
        Self::ConflictingInput { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::config(format!("{:#}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::io(format!("JSON serialization error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    let input = match error {
        CliError::File { source, .. } | CliError::Input(source) => Some(source),
        _ => None,
    };

    match (error, input) {
        (CliError::FileNotFound { path }, _) => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file",
                path.display()
            ));
        }

        (_, Some(InputError::NoFastaRecords)) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Each record must start with a '>' header line\n\
                 • Every header needs at least one sequence line below it"
            );
        }

        (_, Some(InputError::OversizedFile { .. })) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Extract the record of interest into a smaller file\n\
                 • Raise input.max_file_size in dnadiff.toml"
            );
        }

        (_, Some(InputError::LengthMismatch { .. })) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Only substitutions are compared; both sequences must have equal length\n\
                 • Characters other than A, T, C, G are removed before the length check"
            );
        }

        (_, Some(InputError::EmptyInput { .. })) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Provide sequences containing A, T, C or G"
            );
        }

        (CliError::RecordOutOfRange { file, .. }, _) => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Record numbers start at 1\n\
                 • Run 'dnadiff records --fasta {}' to list available records",
                file.display()
            ));
        }

        (CliError::ConflictingInput { .. }, _) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Pass --first-seq or --first-fasta, not both\n\
                 • Pass --second-seq or --second-fasta, not both"
            );
        }

        (CliError::Config { .. }, _) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your dnadiff.toml configuration file\n\
                 • Use 'dnadiff config --example' to generate a sample configuration"
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CliError::config("test message");
        assert!(matches!(err, CliError::Config { .. }));
        assert_eq!(err.to_string(), "Configuration error: test message");
    }

    #[test]
    fn test_error_suggestions() {
        let err = CliError::file_not_found(PathBuf::from("test.fa"));
        let formatted = format_error_with_suggestions(&err);
        assert!(formatted.contains("Suggestions:"));
        assert!(formatted.contains("Check that the file path is correct"));
    }

    #[test]
    fn test_input_error_suggestions() {
        let err = CliError::file(PathBuf::from("empty.fa"), InputError::NoFastaRecords);
        assert_eq!(err.to_string(), "Invalid input in empty.fa: No sequences found in FASTA input");
        assert!(format_error_with_suggestions(&err).contains("'>' header line"));

        let err: CliError = InputError::LengthMismatch { first: 4, second: 3 }.into();
        assert!(format_error_with_suggestions(&err).contains("equal length"));
    }

    #[test]
    fn test_conflicting_input_suggestions() {
        let err = CliError::conflicting_input("first input given twice");
        assert_eq!(err.to_string(), "Conflicting input: first input given twice");
        assert!(format_error_with_suggestions(&err).contains("not both"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io { .. }));
    }
}
