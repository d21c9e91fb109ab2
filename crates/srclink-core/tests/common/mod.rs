//! Backend reply fixtures shaped like the query endpoint's JSON.

use serde_json::{json, Value};

/// One retrieved chunk as the retriever reports it.
pub fn chunk(link: &str, filename: &str, similarity: f64) -> Value {
    json!({
        "chunk_text": "notice body",
        "filename": filename,
        "notice_id": filename.trim_end_matches(".pdf"),
        "similarity": similarity,
        "notice_link": link,
    })
}

/// Reply whose `answer` nests the model text and its chunks.
pub fn nested_reply(query: &str, answer: &str, chunks: Vec<Value>) -> String {
    json!({
        "query": query,
        "answer": { "answer": answer, "sources": chunks },
    })
    .to_string()
}

/// Reply whose `answer` is plain text.
pub fn text_reply(query: &str, answer: &str) -> String {
    json!({ "query": query, "answer": answer }).to_string()
}
