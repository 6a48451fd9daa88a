//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the decision-tree invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A question node is missing the branch that play or validation needed.
    #[error("invalid tree state: question {question:?} is missing its {branch} branch")]
    InvalidTreeState { question: String, branch: Branch },

    /// Training was asked to restructure a node that is already a question.
    #[error("cannot train on {text:?}: node is a question, not an answer")]
    NotAnAnswer { text: String },
}

/// Which edge of a question node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    pub fn from_reply(reply: bool) -> Self {
        if reply {
            Branch::Yes
        } else {
            Branch::No
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Yes => write!(f, "yes"),
            Branch::No => write!(f, "no"),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
