//! CLI for srclink.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use srclink_core::config;
use srclink_core::session::Rating;
use std::path::PathBuf;

use commands::{
    run_clean, run_extract, run_feedback, run_keywords, run_normalize, run_render,
};

/// Top-level CLI for srclink.
#[derive(Debug, Parser)]
#[command(name = "srclink")]
#[command(about = "srclink: clean answers and source links from a RAG backend", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/srclink/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the source links found in answer text.
    Extract {
        /// File with the answer text; stdin when omitted or "-".
        path: Option<PathBuf>,
    },

    /// Normalize URLs and show their display labels.
    Normalize {
        /// URLs as they appear in answer text.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print answer text without its sources block.
    Clean {
        /// File with the answer text; stdin when omitted or "-".
        path: Option<PathBuf>,
    },

    /// Render a backend JSON reply as a conversation.
    Render {
        /// File with the backend reply; stdin when omitted or "-".
        path: Option<PathBuf>,
        /// Query to show; defaults to the one echoed in the reply.
        #[arg(long)]
        query: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
        /// Collapse the sources list.
        #[arg(long)]
        hide_sources: bool,
    },

    /// Rate the answer in a backend reply and print the feedback record.
    Feedback {
        /// File with the backend reply; stdin when omitted or "-".
        path: Option<PathBuf>,
        /// "up" or "down".
        #[arg(long)]
        rating: Rating,
        #[arg(long)]
        comment: Option<String>,
        #[arg(long)]
        query: Option<String>,
    },

    /// Show the keyword form of a question as sent to the retriever.
    Keywords {
        query: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { path } => run_extract(path.as_deref(), &cfg)?,
            CliCommand::Normalize { urls } => run_normalize(&urls, &cfg),
            CliCommand::Clean { path } => run_clean(path.as_deref(), &cfg)?,
            CliCommand::Render {
                path,
                query,
                format,
                hide_sources,
            } => {
                let mut opts = cfg.answer_options();
                if hide_sources {
                    opts.show_sources = false;
                }
                run_render(path.as_deref(), query.as_deref(), format, &opts)?;
            }
            CliCommand::Feedback {
                path,
                rating,
                comment,
                query,
            } => run_feedback(
                path.as_deref(),
                query.as_deref(),
                rating,
                comment.as_deref(),
                &cfg.answer_options(),
            )?,
            CliCommand::Keywords { query } => run_keywords(&query)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
