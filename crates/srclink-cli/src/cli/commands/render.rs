//! `srclink render [path]` – show a backend reply as a conversation.

use anyhow::{Context, Result};
use srclink_core::present::{MarkdownPresenter, PlainPresenter, Presenter};
use srclink_core::response::QueryResponse;
use srclink_core::session::{AnswerOptions, Conversation};
use std::path::Path;

use crate::cli::input::read_input;
use crate::cli::OutputFormat;

/// Shown when neither the flag nor the reply names the query.
const UNKNOWN_QUERY: &str = "(query not recorded)";

/// Runs one submit/receive (or submit/fail) round for the reply at `path`.
pub(super) fn converse(
    path: Option<&Path>,
    query: Option<&str>,
    opts: &AnswerOptions,
) -> Result<Conversation> {
    let json = read_input(path)?;
    let response = QueryResponse::from_json(&json).context("parse backend reply")?;
    let query = query
        .map(str::to_string)
        .or_else(|| response.query.clone())
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_QUERY.to_string());

    let mut conversation = Conversation::new();
    conversation.submit(&query)?;
    match response.into_answer() {
        Ok(answer) => {
            conversation.receive(&answer, opts)?;
        }
        Err(e) => {
            tracing::warn!("backend reply without answer: {}", e);
            conversation.fail(e.to_string())?;
        }
    }
    Ok(conversation)
}

pub fn run_render(
    path: Option<&Path>,
    query: Option<&str>,
    format: OutputFormat,
    opts: &AnswerOptions,
) -> Result<()> {
    let conversation = converse(path, query, opts)?;
    let out = match format {
        OutputFormat::Plain => PlainPresenter.render_all(conversation.messages()),
        OutputFormat::Markdown => MarkdownPresenter.render_all(conversation.messages()),
        OutputFormat::Json => serde_json::to_string_pretty(conversation.messages())?,
    };
    println!("{}", out.trim_end());
    Ok(())
}
