//! Backend answer payloads.
//!
//! The query endpoint replies with `{"query", "answer"}` where `answer` is
//! either plain text or an object carrying its own `answer` text and the
//! retrieved source records. Rejected queries come back as `{"error"}`.

use serde::Deserialize;
use thiserror::Error;

/// Errors turning a backend reply into an answer.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("invalid backend response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("backend response has no answer")]
    MissingAnswer,
}

/// One retrieved source as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceRecord {
    #[serde(default, alias = "notice_link", alias = "url")]
    pub link: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl SourceRecord {
    /// The trimmed link, unless it is empty or the `N/A` placeholder.
    pub fn usable_link(&self) -> Option<&str> {
        let link = self.link.as_deref()?.trim();
        if link.is_empty() || link.eq_ignore_ascii_case("n/a") {
            None
        } else {
            Some(link)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerField {
    Text(String),
    Nested {
        answer: String,
        #[serde(default)]
        sources: Vec<SourceRecord>,
    },
}

/// Raw reply of the query endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    answer: Option<AnswerField>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sources: Vec<SourceRecord>,
}

/// Answer text plus whatever structured sources accompanied it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendAnswer {
    pub raw_text: String,
    pub sources: Vec<SourceRecord>,
}

impl QueryResponse {
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flattens the reply. Nested sources come before top-level ones.
    pub fn into_answer(self) -> Result<BackendAnswer, ResponseError> {
        if let Some(err) = self.error {
            return Err(ResponseError::Backend(err));
        }
        let (raw_text, mut sources) = match self.answer {
            Some(AnswerField::Text(text)) => (text, Vec::new()),
            Some(AnswerField::Nested { answer, sources }) => (answer, sources),
            None => return Err(ResponseError::MissingAnswer),
        };
        sources.extend(self.sources);
        Ok(BackendAnswer { raw_text, sources })
    }
}

impl BackendAnswer {
    /// Parses a query endpoint reply straight into an answer.
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        QueryResponse::from_json(json)?.into_answer()
    }
}
