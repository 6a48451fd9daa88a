//! Application-level errors (wraps domain errors)

use std::io;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add I/O and config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot read {origin}: {source}")]
    SourceUnavailable {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed tree in {origin}: {source}")]
    MalformedTree {
        origin: String,
        #[source]
        source: DomainError,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True when the tree source does not exist, as opposed to being unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
