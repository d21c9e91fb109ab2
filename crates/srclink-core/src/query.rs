//! User query validation and retrieval keyword normalization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Query cannot be empty.")]
    Empty,
}

/// Question words and fillers that carry no retrieval signal.
const STOPWORDS: &[&str] = &[
    "when", "what", "which", "who", "where", "how", "why", "is", "are", "was", "were", "will",
    "shall", "can", "could", "please", "tell", "me", "about", "the", "a", "an", "of", "for",
];

/// Trims `query`; blank input is rejected.
pub fn validate_query(query: &str) -> Result<String, QueryError> {
    let q = query.trim();
    if q.is_empty() {
        return Err(QueryError::Empty);
    }
    Ok(q.to_string())
}

/// Turns a natural-language question into a keyword-dense search string.
///
/// Lowercases, drops one trailing `?`, removes stopwords and joins the rest
/// with single spaces.
pub fn normalize_query(query: &str) -> String {
    let q = query.trim().to_lowercase();
    let q = q.strip_suffix('?').unwrap_or(&q);
    q.split_whitespace()
        .filter(|t| !STOPWORDS.contains(t))
        .collect::<Vec<_>>()
        .join(" ")
}
