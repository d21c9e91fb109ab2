//! `srclink keywords <query>` – retrieval keyword form of a question.

use anyhow::Result;
use srclink_core::query::{normalize_query, validate_query};

pub fn run_keywords(query: &str) -> Result<()> {
    let query = validate_query(query)?;
    println!("{}", normalize_query(&query));
    Ok(())
}
