//! Decide which kinds a run actually regenerates.

use std::collections::BTreeSet;

use quill_core::enums::ContentKind;
use serde::Serialize;

/// Kinds to run, in requested order, and whether the topic changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPlan {
    pub kinds: Vec<ContentKind>,
    pub topic_changed: bool,
}

impl TargetPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Apply the idempotency rule.
///
/// A changed topic targets everything requested. An unchanged topic skips
/// kinds already in `generated`. Topics are compared after trimming.
#[must_use]
pub fn compute_target_kinds(
    requested: &[ContentKind],
    topic: &str,
    prior_topic: &str,
    generated: &BTreeSet<ContentKind>,
) -> TargetPlan {
    let topic_changed = topic.trim() != prior_topic.trim();
    let mut seen = BTreeSet::new();
    let kinds = requested
        .iter()
        .copied()
        .filter(|kind| seen.insert(*kind))
        .filter(|kind| topic_changed || !generated.contains(kind))
        .collect();
    TargetPlan {
        kinds,
        topic_changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use ContentKind::{Authors, Facts, Newsletters, Podcasts, Tools};

    #[test]
    fn unchanged_topic_skips_generated_kinds() {
        let plan = compute_target_kinds(&[Authors, Facts], "AI", "AI", &BTreeSet::from([Authors]));
        assert_eq!(plan.kinds, vec![Facts]);
        assert!(!plan.topic_changed);
    }

    #[test]
    fn changed_topic_targets_everything_requested() {
        let plan = compute_target_kinds(
            &[Authors, Facts],
            "B",
            "A",
            &BTreeSet::from([Authors, Facts]),
        );
        assert_eq!(plan.kinds, vec![Authors, Facts]);
        assert!(plan.topic_changed);
    }

    #[test]
    fn requested_order_is_kept_and_duplicates_dropped() {
        let plan = compute_target_kinds(
            &[Podcasts, Authors, Podcasts, Tools],
            "t",
            "",
            &BTreeSet::new(),
        );
        assert_eq!(plan.kinds, vec![Podcasts, Authors, Tools]);
    }

    #[rstest]
    #[case("AI", " AI ", false)]
    #[case("AI", "ai", true)]
    #[case("AI", "", true)]
    fn topic_comparison(#[case] topic: &str, #[case] prior: &str, #[case] changed: bool) {
        let plan = compute_target_kinds(&[Newsletters], topic, prior, &BTreeSet::new());
        assert_eq!(plan.topic_changed, changed);
    }

    #[test]
    fn everything_generated_is_empty_plan() {
        let plan = compute_target_kinds(
            &[Authors, Facts],
            "AI",
            "AI",
            &BTreeSet::from([Authors, Facts, Tools]),
        );
        assert!(plan.is_empty());
    }
}
