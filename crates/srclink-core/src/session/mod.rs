//! Conversation state for one interactive session.
//!
//! All mutation goes through the transitions on [`Conversation`]: submit,
//! receive, fail, toggle-sources, and the feedback open/submit/cancel trio.
//! At most one request is in flight at a time.

mod error;
mod feedback;
mod message;

pub use error::SessionError;
pub use feedback::{FeedbackDraft, FeedbackRecord, ParseRatingError, Rating};
pub use message::{Message, Role};

use crate::answer::clean_answer;
use crate::links::{resolve_sources, DisplayOptions};
use crate::query::validate_query;
use crate::response::BackendAnswer;

/// How received answers are turned into messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOptions {
    pub display: DisplayOptions,
    /// Initial visibility of an answer's sources.
    pub show_sources: bool,
    pub strip_filenames: bool,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self {
            display: DisplayOptions::default(),
            show_sources: true,
            strip_filenames: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    /// Index of the user message still waiting for an answer.
    pending: Option<usize>,
    feedback: Option<FeedbackDraft>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Answer message the open feedback form refers to, if any.
    pub fn feedback_target(&self) -> Option<usize> {
        self.feedback.map(|d| d.message_index)
    }

    pub fn last_answer_index(&self) -> Option<usize> {
        self.messages.iter().rposition(Message::is_answer)
    }

    /// Records a user query and marks it in flight.
    pub fn submit(&mut self, query: &str) -> Result<&Message, SessionError> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        let query = validate_query(query)?;
        let index = self.push(Message::user(query));
        self.pending = Some(index);
        tracing::debug!(index, "query submitted");
        Ok(&self.messages[index])
    }

    /// Completes the in-flight request with a backend answer.
    pub fn receive(
        &mut self,
        answer: &BackendAnswer,
        opts: &AnswerOptions,
    ) -> Result<&Message, SessionError> {
        self.pending.take().ok_or(SessionError::NotPending)?;

        let text = clean_answer(&answer.raw_text, opts.strip_filenames);
        let sources = resolve_sources(&answer.raw_text, &answer.sources, &opts.display);
        let index = self.push(Message::assistant(text, sources, opts.show_sources));
        tracing::debug!(
            index,
            sources = self.messages[index].sources.len(),
            "answer received"
        );
        Ok(&self.messages[index])
    }

    /// Completes the in-flight request with a failure shown to the user.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<&Message, SessionError> {
        self.pending.take().ok_or(SessionError::NotPending)?;
        let index = self.push(Message::error(reason));
        tracing::debug!(index, "request failed");
        Ok(&self.messages[index])
    }

    /// Flips source visibility of the answer at `index`; returns the new state.
    pub fn toggle_sources(&mut self, index: usize) -> Result<bool, SessionError> {
        let message = self.answer_mut(index)?;
        message.sources_visible = !message.sources_visible;
        Ok(message.sources_visible)
    }

    /// Opens the feedback form for the answer at `index`, replacing any open one.
    pub fn open_feedback(&mut self, index: usize) -> Result<(), SessionError> {
        self.answer_mut(index)?;
        self.feedback = Some(FeedbackDraft {
            message_index: index,
        });
        tracing::debug!(index, "feedback opened");
        Ok(())
    }

    /// Submits the open feedback form and closes it.
    pub fn submit_feedback(
        &mut self,
        rating: Rating,
        comment: Option<&str>,
    ) -> Result<FeedbackRecord, SessionError> {
        let draft = self.feedback.take().ok_or(SessionError::NoFeedbackOpen)?;
        let index = draft.message_index;
        let query = self.messages[..index]
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.text.clone())
            .unwrap_or_default();
        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        tracing::info!(index, %rating, "feedback submitted");
        Ok(FeedbackRecord {
            query,
            answer: self.messages[index].text.clone(),
            rating,
            comment,
        })
    }

    /// Closes the feedback form without submitting; false if none was open.
    pub fn cancel_feedback(&mut self) -> bool {
        self.feedback.take().is_some()
    }

    fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    fn answer_mut(&mut self, index: usize) -> Result<&mut Message, SessionError> {
        let message = self
            .messages
            .get_mut(index)
            .ok_or(SessionError::NoSuchMessage(index))?;
        if !message.is_answer() {
            return Err(SessionError::NotAnAnswer(index));
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests;
