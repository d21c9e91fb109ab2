//! Presentation of conversation messages.
//!
//! Styling lives behind [`Presenter`] so the conversation logic stays the
//! same whichever output format is chosen.

use std::fmt::Write;

use crate::session::{Message, Role};

pub trait Presenter {
    fn render(&self, message: &Message) -> String;

    fn render_all(&self, messages: &[Message]) -> String {
        messages
            .iter()
            .map(|m| self.render(m))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Terminal-friendly plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPresenter;

/// Markdown with sources as link bullets.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownPresenter;

fn hidden_hint(count: usize) -> String {
    match count {
        1 => "1 source hidden".to_string(),
        n => format!("{n} sources hidden"),
    }
}

impl Presenter for PlainPresenter {
    fn render(&self, message: &Message) -> String {
        let prefix = match message.role {
            Role::User => "you> ",
            Role::Assistant => "",
            Role::Error => "error: ",
        };
        let mut out = format!("{prefix}{}\n", message.text);
        if message.sources.is_empty() {
            return out;
        }
        if !message.sources_visible {
            let _ = writeln!(out, "  ({})", hidden_hint(message.sources.len()));
            return out;
        }
        out.push_str("Sources:\n");
        for (i, src) in message.sources.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {} <{}>", i + 1, src.label, src.url);
        }
        out
    }
}

impl Presenter for MarkdownPresenter {
    fn render(&self, message: &Message) -> String {
        let mut out = match message.role {
            Role::User => format!("**You:** {}\n", message.text),
            Role::Assistant => format!("{}\n", message.text),
            Role::Error => format!("> **Error:** {}\n", message.text),
        };
        if message.sources.is_empty() {
            return out;
        }
        if !message.sources_visible {
            let _ = writeln!(out, "\n_{}_", hidden_hint(message.sources.len()));
            return out;
        }
        out.push_str("\n**Sources**\n\n");
        for src in &message.sources {
            let _ = writeln!(out, "- [{}]({})", src.label, src.url);
        }
        out
    }
}
