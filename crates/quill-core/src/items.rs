//! Accepted items, one variant per content kind.
//!
//! An accepted item survived payload validation and link screening and is
//! eligible for storage in a project's per-kind list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ContentKind, FactCategory, ToolTier};

/// A single quote, flattened out of an author entry.
///
/// Quotes by the same author share `author_name_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorQuote {
    pub id: String,
    pub author_name: String,
    pub author_name_key: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub source: Option<String>,
    pub source_year: Option<String>,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: String,
    pub category: FactCategory,
    pub text: String,
    /// Present only if the link passed validation.
    pub source_link: Option<String>,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub tier: ToolTier,
    pub name: String,
    pub description: Option<String>,
    /// Present only if the link passed validation.
    pub url: Option<String>,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub frequency: Option<String>,
    pub topics: Vec<String>,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    pub id: String,
    pub title: String,
    pub host: Option<String>,
    pub link: String,
    pub frequency: Option<String>,
    pub topics: Vec<String>,
    pub relevance_score: f64,
}

/// Any accepted item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedItem {
    Author(AuthorQuote),
    Fact(Fact),
    Tool(Tool),
    Newsletter(Newsletter),
    Podcast(Podcast),
}

impl GeneratedItem {
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Author(_) => ContentKind::Authors,
            Self::Fact(_) => ContentKind::Facts,
            Self::Tool(_) => ContentKind::Tools,
            Self::Newsletter(_) => ContentKind::Newsletters,
            Self::Podcast(_) => ContentKind::Podcasts,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Author(q) => &q.id,
            Self::Fact(f) => &f.id,
            Self::Tool(t) => &t.id,
            Self::Newsletter(n) => &n.id,
            Self::Podcast(p) => &p.id,
        }
    }

    #[must_use]
    pub const fn relevance_score(&self) -> f64 {
        match self {
            Self::Author(q) => q.relevance_score,
            Self::Fact(f) => f.relevance_score,
            Self::Tool(t) => t.relevance_score,
            Self::Newsletter(n) => n.relevance_score,
            Self::Podcast(p) => p.relevance_score,
        }
    }

    /// The item's validated link, if it carries one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Author(_) => None,
            Self::Fact(f) => f.source_link.as_deref(),
            Self::Tool(t) => t.url.as_deref(),
            Self::Newsletter(n) => Some(&n.link),
            Self::Podcast(p) => Some(&p.link),
        }
    }

    /// Primary display text: the quote, fact, or name/title.
    #[must_use]
    pub fn headline(&self) -> &str {
        match self {
            Self::Author(q) => &q.quote,
            Self::Fact(f) => &f.text,
            Self::Tool(t) => &t.name,
            Self::Newsletter(n) => &n.title,
            Self::Podcast(p) => &p.title,
        }
    }
}

/// Grouping key for an author name: lowercase words joined by `-`.
///
/// `"  Seth   Godin "` → `"seth-godin"`.
#[must_use]
pub fn author_name_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
