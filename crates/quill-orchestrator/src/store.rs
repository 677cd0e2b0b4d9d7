//! The project state seam.
//!
//! The orchestrator reads and writes project state only through
//! [`ProjectStore`]. Persistence is the implementor's concern; the in-memory
//! [`ProjectGenerationState`] is itself a store.

use std::collections::BTreeSet;

use quill_core::enums::ContentKind;
use quill_core::items::GeneratedItem;
use quill_core::payloads::HeaderPayload;
use quill_core::project::ProjectGenerationState;

pub trait ProjectStore: Send {
    fn project_id(&self) -> &str;

    fn topic(&self) -> &str;
    fn set_topic(&mut self, topic: &str);

    fn items(&self, kind: ContentKind) -> &[GeneratedItem];
    /// Replace the whole list for `kind`.
    fn set_items(&mut self, kind: ContentKind, items: Vec<GeneratedItem>);

    fn generated_kinds(&self) -> BTreeSet<ContentKind>;
    fn set_generated_kinds(&mut self, kinds: BTreeSet<ContentKind>);

    /// Merge header fields whose switch is on into the project personalization.
    fn merge_personalization(&mut self, header: &HeaderPayload, subject: bool, intro: bool);

    /// Full reset for a new topic: every list and the generated-kinds set
    /// are cleared, then `topic` is stored.
    fn reset_for_topic(&mut self, topic: &str) {
        for kind in ContentKind::ALL {
            self.set_items(kind, Vec::new());
        }
        self.set_generated_kinds(BTreeSet::new());
        self.set_topic(topic);
    }
}

impl ProjectStore for ProjectGenerationState {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    fn topic(&self) -> &str {
        &self.topic
    }

    fn set_topic(&mut self, topic: &str) {
        self.topic = topic.to_string();
    }

    fn items(&self, kind: ContentKind) -> &[GeneratedItem] {
        Self::items(self, kind)
    }

    fn set_items(&mut self, kind: ContentKind, items: Vec<GeneratedItem>) {
        Self::set_items(self, kind, items);
    }

    fn generated_kinds(&self) -> BTreeSet<ContentKind> {
        self.generated_kinds.clone()
    }

    fn set_generated_kinds(&mut self, kinds: BTreeSet<ContentKind>) {
        self.generated_kinds = kinds;
    }

    fn merge_personalization(&mut self, header: &HeaderPayload, subject: bool, intro: bool) {
        self.personalization.merge(header, subject, intro);
    }

    fn reset_for_topic(&mut self, topic: &str) {
        Self::reset_for_topic(self, topic);
    }
}
