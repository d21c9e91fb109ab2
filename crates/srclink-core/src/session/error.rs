//! Rejected conversation transitions.

use thiserror::Error;

use crate::query::QueryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
    /// A query was submitted while another one is still unanswered.
    #[error("a request is already in flight")]
    Busy,
    #[error("no request is in flight")]
    NotPending,
    #[error("no message at index {0}")]
    NoSuchMessage(usize),
    #[error("message {0} is not an answer")]
    NotAnAnswer(usize),
    #[error("no feedback form is open")]
    NoFeedbackOpen,
}
