//! Conversation messages.

use serde::Serialize;

use crate::links::ResolvedSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// A failed request, shown in place of an answer.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ResolvedSource>,
    pub sources_visible: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
            sources_visible: false,
        }
    }

    pub fn assistant(
        text: impl Into<String>,
        sources: Vec<ResolvedSource>,
        sources_visible: bool,
    ) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            sources,
            sources_visible,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            role: Role::Error,
            text: text.into(),
            sources: Vec::new(),
            sources_visible: false,
        }
    }

    pub fn is_answer(&self) -> bool {
        self.role == Role::Assistant
    }
}
