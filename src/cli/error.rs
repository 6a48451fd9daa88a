//! CLI-level errors (wraps application errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("{} contains no questions", .0.display())]
    EmptyTree(PathBuf),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => crate::exitcode::NOINPUT,
            CliError::EmptyTree(_) => crate::exitcode::DATAERR,
            CliError::Application(e) => match e {
                ApplicationError::SourceUnavailable { .. } => crate::exitcode::NOINPUT,
                ApplicationError::MalformedTree { .. } => crate::exitcode::DATAERR,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(
                    DomainError::InvalidTreeState { .. } | DomainError::NotAnAnswer { .. },
                ) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Branch;
    use std::io;

    #[test]
    fn given_missing_source_when_mapping_exit_code_then_noinput() {
        let err = CliError::from(ApplicationError::SourceUnavailable {
            origin: "cats.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_invalid_tree_state_when_mapping_exit_code_then_software() {
        let err = CliError::from(ApplicationError::from(DomainError::InvalidTreeState {
            question: "Q".into(),
            branch: Branch::No,
        }));
        assert_eq!(err.exit_code(), crate::exitcode::SOFTWARE);
    }

    #[test]
    fn given_empty_tree_when_displaying_then_names_file() {
        let err = CliError::EmptyTree(PathBuf::from("cats.txt"));
        assert_eq!(err.to_string(), "cats.txt contains no questions");
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
