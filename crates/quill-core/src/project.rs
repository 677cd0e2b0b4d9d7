//! Per-project generation state.
//!
//! A kind's item list is only ever replaced wholesale, never merged. The
//! orchestrator clears a kind's list when its task starts and replaces it
//! with the accepted items when the task succeeds.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::ContentKind;
use crate::items::GeneratedItem;
use crate::payloads::HeaderPayload;

/// Newsletter header fields produced by the header task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    pub subject: Option<String>,
    pub intro: Option<String>,
}

impl Personalization {
    /// Merge only the header fields whose switch is on.
    ///
    /// A switched-on field with no value in `header` leaves the stored value
    /// untouched.
    pub fn merge(&mut self, header: &HeaderPayload, subject: bool, intro: bool) {
        if subject && let Some(value) = non_blank(header.subject.as_deref()) {
            self.subject = Some(value);
        }
        if intro && let Some(value) = non_blank(header.intro.as_deref()) {
            self.intro = Some(value);
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Topic, generated kinds, and per-kind item lists for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectGenerationState {
    pub project_id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub generated_kinds: BTreeSet<ContentKind>,
    #[serde(default)]
    pub items: BTreeMap<ContentKind, Vec<GeneratedItem>>,
    #[serde(default)]
    pub personalization: Personalization,
}

impl ProjectGenerationState {
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    /// Items for `kind`; empty if the kind was never generated.
    #[must_use]
    pub fn items(&self, kind: ContentKind) -> &[GeneratedItem] {
        self.items.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Replace the whole list for `kind`.
    pub fn set_items(&mut self, kind: ContentKind, items: Vec<GeneratedItem>) {
        self.items.insert(kind, items);
    }

    /// Clear every item list and the generated-kinds set, then store `topic`.
    pub fn reset_for_topic(&mut self, topic: &str) {
        for kind in ContentKind::ALL {
            self.items.insert(kind, Vec::new());
        }
        self.generated_kinds.clear();
        self.topic = topic.to_string();
    }

    /// Kinds with at least one stored item, in canonical order.
    #[must_use]
    pub fn populated_kinds(&self) -> Vec<ContentKind> {
        ContentKind::ALL
            .into_iter()
            .filter(|kind| !self.items(*kind).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FactCategory;
    use crate::items::{Fact, GeneratedItem};
    use pretty_assertions::assert_eq;

    fn fact(id: &str) -> GeneratedItem {
        GeneratedItem::Fact(Fact {
            id: id.into(),
            category: FactCategory::Fun,
            text: "Octopuses have three hearts".into(),
            source_link: None,
            relevance_score: 40.0,
        })
    }

    #[test]
    fn items_default_to_empty() {
        let state = ProjectGenerationState::new("p1");
        assert!(state.items(ContentKind::Tools).is_empty());
        assert!(state.populated_kinds().is_empty());
    }

    #[test]
    fn reset_for_topic_clears_everything() {
        let mut state = ProjectGenerationState::new("p1");
        state.topic = "A".into();
        state.set_items(ContentKind::Facts, vec![fact("fct-00000001")]);
        state.generated_kinds.insert(ContentKind::Facts);

        state.reset_for_topic("B");

        assert_eq!(state.topic, "B");
        assert!(state.generated_kinds.is_empty());
        for kind in ContentKind::ALL {
            assert!(state.items(kind).is_empty());
        }
    }

    #[test]
    fn set_items_replaces_list() {
        let mut state = ProjectGenerationState::new("p1");
        state.set_items(
            ContentKind::Facts,
            vec![fact("fct-00000001"), fact("fct-00000002")],
        );
        state.set_items(ContentKind::Facts, vec![fact("fct-00000003")]);
        assert_eq!(state.items(ContentKind::Facts).len(), 1);
        assert_eq!(state.populated_kinds(), vec![ContentKind::Facts]);
    }

    #[test]
    fn personalization_merges_only_enabled_fields() {
        let mut p = Personalization {
            subject: Some("old subject".into()),
            intro: Some("old intro".into()),
        };
        let header = HeaderPayload {
            subject: Some("new subject".into()),
            intro: Some("new intro".into()),
        };

        p.merge(&header, true, false);

        assert_eq!(p.subject.as_deref(), Some("new subject"));
        assert_eq!(p.intro.as_deref(), Some("old intro"));
    }

    #[test]
    fn personalization_ignores_blank_values() {
        let mut p = Personalization {
            subject: Some("keep".into()),
            intro: None,
        };
        let header = HeaderPayload {
            subject: Some("   ".into()),
            intro: Some("Hello readers".into()),
        };
        p.merge(&header, true, true);
        assert_eq!(p.subject.as_deref(), Some("keep"));
        assert_eq!(p.intro.as_deref(), Some("Hello readers"));
    }

    #[test]
    fn state_roundtrips_through_json() {
        let mut state = ProjectGenerationState::new("p1");
        state.reset_for_topic("AI in marketing");
        state.set_items(ContentKind::Facts, vec![fact("fct-00000001")]);
        state.generated_kinds.insert(ContentKind::Facts);

        let json = serde_json::to_string(&state).unwrap();
        let back: ProjectGenerationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
