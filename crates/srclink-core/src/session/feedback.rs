//! Feedback on individual answers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rating {0:?} (expected \"up\" or \"down\")")]
pub struct ParseRatingError(String);

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "+" | "good" => Ok(Rating::Up),
            "down" | "-" | "bad" => Ok(Rating::Down),
            other => Err(ParseRatingError(other.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Up => write!(f, "up"),
            Rating::Down => write!(f, "down"),
        }
    }
}

/// Open feedback form targeting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub message_index: usize,
}

/// Submitted feedback, ready to be posted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub query: String,
    pub answer: String,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
