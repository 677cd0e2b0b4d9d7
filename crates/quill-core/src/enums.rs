//! Content kinds, run states, and log severities for Quill.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`ContentKind`] is a closed set: adding a kind requires adding an adapter in
//! `quill-generate` and a payload schema in `quill-schema`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// One of the fixed content categories a run can generate.
///
/// The declaration order is the canonical sort order used when the set of
/// generated kinds is persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Authors,
    Facts,
    Tools,
    Newsletters,
    Podcasts,
}

impl ContentKind {
    /// Every kind, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Authors,
        Self::Facts,
        Self::Tools,
        Self::Newsletters,
        Self::Podcasts,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Facts => "facts",
            Self::Tools => "tools",
            Self::Newsletters => "newsletters",
            Self::Podcasts => "podcasts",
        }
    }

    /// Human-readable name used in run logs and content summaries.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Authors => "author quotes",
            Self::Facts => "fun/science facts",
            Self::Tools => "tools",
            Self::Newsletters => "newsletters",
            Self::Podcasts => "podcasts",
        }
    }

    /// Prefix for ids of items of this kind (see [`crate::ids`]).
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Authors => "aut",
            Self::Facts => "fct",
            Self::Tools => "tol",
            Self::Newsletters => "nws",
            Self::Podcasts => "pod",
        }
    }

    /// Whether every item of this kind must carry a validated link to be accepted.
    #[must_use]
    pub const fn requires_link(self) -> bool {
        matches!(self, Self::Newsletters | Self::Podcasts)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authors" | "author" | "quotes" => Ok(Self::Authors),
            "facts" | "fact" => Ok(Self::Facts),
            "tools" | "tool" => Ok(Self::Tools),
            "newsletters" | "newsletter" => Ok(Self::Newsletters),
            "podcasts" | "podcast" => Ok(Self::Podcasts),
            other => Err(CoreError::Validation(format!(
                "unknown content kind '{other}' (expected one of: authors, facts, tools, newsletters, podcasts)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// FactCategory / ToolTier
// ---------------------------------------------------------------------------

/// Which fact list a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    Fun,
    Science,
}

/// Pricing tier of a recommended tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToolTier {
    Free,
    Paid,
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a run-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RunState
// ---------------------------------------------------------------------------

/// State of a generation run.
///
/// ```text
/// idle → initializing → running_header? → running_task(kind)* → finalizing → idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Initializing,
    RunningHeader,
    RunningTask(ContentKind),
    Finalizing,
}

impl RunState {
    /// Whether moving to `next` follows the run lifecycle.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Idle, Self::Initializing)
            | (
                Self::Initializing,
                Self::RunningHeader | Self::RunningTask(_) | Self::Finalizing | Self::Idle,
            )
            | (Self::RunningHeader | Self::RunningTask(_), Self::RunningTask(_) | Self::Finalizing)
            | (Self::Finalizing, Self::Idle) => true,
            _ => false,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Initializing => f.write_str("initializing"),
            Self::RunningHeader => f.write_str("running header"),
            Self::RunningTask(kind) => write!(f, "running {kind}"),
            Self::Finalizing => f.write_str("finalizing"),
        }
    }
}

// ---------------------------------------------------------------------------
// RunStatus
// ---------------------------------------------------------------------------

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every targeted task succeeded.
    Success,
    /// At least one targeted task failed.
    Partial,
    /// Nothing needed (re)generation.
    NoOp,
}

impl RunStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::NoOp => "no_op",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("authors", ContentKind::Authors)]
    #[case("Quotes", ContentKind::Authors)]
    #[case(" facts ", ContentKind::Facts)]
    #[case("tool", ContentKind::Tools)]
    #[case("NEWSLETTERS", ContentKind::Newsletters)]
    #[case("podcast", ContentKind::Podcasts)]
    fn content_kind_parses_aliases(#[case] input: &str, #[case] expected: ContentKind) {
        assert_eq!(input.parse::<ContentKind>().unwrap(), expected);
    }

    #[test]
    fn content_kind_rejects_unknown() {
        let err = "videos".parse::<ContentKind>().unwrap_err();
        assert!(err.to_string().contains("videos"));
    }

    #[test]
    fn content_kind_sort_order_is_declaration_order() {
        let mut kinds = vec![
            ContentKind::Podcasts,
            ContentKind::Authors,
            ContentKind::Tools,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![ContentKind::Authors, ContentKind::Tools, ContentKind::Podcasts]
        );
    }

    #[test]
    fn only_newsletters_and_podcasts_require_links() {
        let required: Vec<_> = ContentKind::ALL
            .into_iter()
            .filter(|k| k.requires_link())
            .collect();
        assert_eq!(required, vec![ContentKind::Newsletters, ContentKind::Podcasts]);
    }

    #[test]
    fn run_state_serializes_with_kind() {
        let json = serde_json::to_string(&RunState::RunningTask(ContentKind::Facts)).unwrap();
        assert_eq!(json, r#"{"state":"running_task","kind":"facts"}"#);
        let idle = serde_json::to_string(&RunState::Idle).unwrap();
        assert_eq!(idle, r#"{"state":"idle"}"#);
    }

    #[test]
    fn run_state_lifecycle_transitions() {
        assert!(RunState::Idle.can_transition_to(RunState::Initializing));
        assert!(RunState::Initializing.can_transition_to(RunState::RunningHeader));
        assert!(
            RunState::RunningHeader.can_transition_to(RunState::RunningTask(ContentKind::Tools))
        );
        assert!(
            RunState::RunningTask(ContentKind::Tools)
                .can_transition_to(RunState::RunningTask(ContentKind::Podcasts))
        );
        assert!(RunState::Finalizing.can_transition_to(RunState::Idle));
        assert!(!RunState::Idle.can_transition_to(RunState::Finalizing));
        assert!(!RunState::Finalizing.can_transition_to(RunState::RunningHeader));
    }
}
