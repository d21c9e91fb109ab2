//! `srclink feedback [path] --rating up|down` – rate a backend answer.

use anyhow::{Context, Result};
use srclink_core::session::{AnswerOptions, Rating};
use std::path::Path;

use super::render::converse;

/// Prints the feedback record as JSON; posting it is left to the caller.
pub fn run_feedback(
    path: Option<&Path>,
    query: Option<&str>,
    rating: Rating,
    comment: Option<&str>,
    opts: &AnswerOptions,
) -> Result<()> {
    let mut conversation = converse(path, query, opts)?;
    let index = conversation
        .last_answer_index()
        .context("backend reply has no answer to rate")?;
    conversation.open_feedback(index)?;
    let record = conversation.submit_feedback(rating, comment)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
