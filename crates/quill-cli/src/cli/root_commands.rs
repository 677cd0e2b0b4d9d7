use std::path::PathBuf;

use clap::{Args, Subcommand};
use quill_core::enums::ContentKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate content for a topic.
    Generate(GenerateArgs),
    /// Probe one or more links.
    CheckLink(CheckLinkArgs),
    /// Print the stored project state.
    Show,
    /// Render the project as a Markdown newsletter preview.
    Preview,
    /// Print the JSON Schema for a generation target.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Newsletter topic.
    pub topic: String,

    /// Content kinds to generate, comma separated (default: all).
    #[arg(long, value_delimiter = ',')]
    pub kinds: Vec<ContentKind>,

    /// Generate only the header; no content kinds.
    #[arg(long, conflicts_with = "kinds")]
    pub header_only: bool,

    /// Generate a subject line.
    #[arg(long)]
    pub subject: bool,

    /// Generate an intro paragraph.
    #[arg(long)]
    pub intro: bool,

    /// Project description passed as context.
    #[arg(long)]
    pub description: Option<String>,

    /// Intended audience (defaults to general.default_audience).
    #[arg(long)]
    pub audience: Option<String>,

    /// Write the run log as JSON Lines to this path.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl GenerateArgs {
    /// Requested kinds: the explicit list, nothing for `--header-only`, or all.
    #[must_use]
    pub fn requested_kinds(&self) -> Vec<ContentKind> {
        if self.header_only {
            Vec::new()
        } else if self.kinds.is_empty() {
            ContentKind::ALL.to_vec()
        } else {
            self.kinds.clone()
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct CheckLinkArgs {
    /// URLs to probe.
    #[arg(required = true)]
    pub urls: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Target name (authors, facts, tools, newsletters, podcasts, header).
    pub target: String,
}
