//! Markdown newsletter preview.
//!
//! Subject as the title (topic when no subject), the intro, then one section
//! per non-empty kind with items ordered by relevance, highest first.

use std::fmt::Write;

use quill_core::enums::{ContentKind, FactCategory, ToolTier};
use quill_core::items::GeneratedItem;
use quill_core::project::ProjectGenerationState;

#[must_use]
pub fn render_markdown(state: &ProjectGenerationState) -> String {
    let mut out = String::new();
    let title = state
        .personalization
        .subject
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(state.topic.as_str());
    let title = if title.trim().is_empty() {
        "Untitled newsletter"
    } else {
        title
    };
    let _ = writeln!(out, "# {title}");
    if let Some(intro) = state.personalization.intro.as_deref() {
        let _ = write!(out, "\n{intro}\n");
    }

    for kind in state.populated_kinds() {
        let mut items: Vec<&GeneratedItem> = state.items(kind).iter().collect();
        items.sort_by(|a, b| b.relevance_score().total_cmp(&a.relevance_score()));
        match kind {
            ContentKind::Facts => {
                section_facts(&mut out, &items, FactCategory::Fun, "Fun facts");
                section_facts(&mut out, &items, FactCategory::Science, "Science facts");
            }
            _ => {
                let _ = write!(out, "\n## {}\n\n", section_title(kind));
                for item in items {
                    let _ = writeln!(out, "{}", item_line(item));
                }
            }
        }
    }
    out
}

const fn section_title(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Authors => "Quotes",
        ContentKind::Facts => "Facts",
        ContentKind::Tools => "Tools",
        ContentKind::Newsletters => "Newsletters",
        ContentKind::Podcasts => "Podcasts",
    }
}

fn section_facts(out: &mut String, items: &[&GeneratedItem], category: FactCategory, title: &str) {
    let facts: Vec<_> = items
        .iter()
        .filter(|item| matches!(item, GeneratedItem::Fact(f) if f.category == category))
        .collect();
    if facts.is_empty() {
        return;
    }
    let _ = write!(out, "\n## {title}\n\n");
    for item in facts {
        let _ = writeln!(out, "{}", item_line(item));
    }
}

fn item_line(item: &GeneratedItem) -> String {
    match item {
        GeneratedItem::Author(q) => {
            let mut line = format!("> \"{}\"\n> -- {}", q.quote, q.author_name);
            if let Some(title) = &q.author_title {
                let _ = write!(line, ", {title}");
            }
            if let Some(source) = &q.source {
                let _ = write!(line, " (*{source}*");
                if let Some(year) = &q.source_year {
                    let _ = write!(line, ", {year}");
                }
                line.push(')');
            }
            line.push('\n');
            line
        }
        GeneratedItem::Fact(f) => match &f.source_link {
            Some(link) => format!("- {} ([source]({link}))", f.text),
            None => format!("- {}", f.text),
        },
        GeneratedItem::Tool(t) => {
            let tier = match t.tier {
                ToolTier::Free => "free",
                ToolTier::Paid => "paid",
            };
            let name = t
                .url
                .as_ref()
                .map_or_else(|| format!("**{}**", t.name), |url| format!("**[{}]({url})**", t.name));
            match &t.description {
                Some(desc) => format!("- {name} ({tier}): {desc}"),
                None => format!("- {name} ({tier})"),
            }
        }
        GeneratedItem::Newsletter(n) => {
            linked_entry(&n.title, &n.link, n.frequency.as_deref(), n.description.as_deref())
        }
        GeneratedItem::Podcast(p) => {
            let host = p.host.as_deref().map(|h| format!("hosted by {h}"));
            linked_entry(&p.title, &p.link, p.frequency.as_deref(), host.as_deref())
        }
    }
}

fn linked_entry(title: &str, link: &str, frequency: Option<&str>, detail: Option<&str>) -> String {
    let mut line = format!("- [{title}]({link})");
    if let Some(freq) = frequency {
        let _ = write!(line, " ({freq})");
    }
    if let Some(detail) = detail {
        let _ = write!(line, ": {detail}");
    }
    line
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_core::items::{AuthorQuote, Fact, Newsletter};

    use super::*;

    fn fact(text: &str, category: FactCategory, score: f64) -> GeneratedItem {
        GeneratedItem::Fact(Fact {
            id: format!("fct-{text}"),
            category,
            text: text.into(),
            source_link: None,
            relevance_score: score,
        })
    }

    #[test]
    fn empty_project_renders_title_only() {
        let state = ProjectGenerationState::new("p");
        assert_eq!(render_markdown(&state), "# Untitled newsletter\n");
    }

    #[test]
    fn subject_and_intro_lead_the_preview() {
        let mut state = ProjectGenerationState::new("p");
        state.topic = "AI".into();
        state.personalization.subject = Some("This week in AI".into());
        state.personalization.intro = Some("Hello readers.".into());
        assert_eq!(
            render_markdown(&state),
            "# This week in AI\n\nHello readers.\n"
        );
    }

    #[test]
    fn sections_follow_kind_order_and_relevance() {
        let mut state = ProjectGenerationState::new("p");
        state.topic = "AI".into();
        state.set_items(
            ContentKind::Newsletters,
            vec![GeneratedItem::Newsletter(Newsletter {
                id: "nws-1".into(),
                title: "The Batch".into(),
                description: None,
                link: "https://batch.example".into(),
                frequency: Some("weekly".into()),
                topics: vec![],
                relevance_score: 90.0,
            })],
        );
        state.set_items(
            ContentKind::Facts,
            vec![
                fact("low", FactCategory::Fun, 10.0),
                fact("science", FactCategory::Science, 50.0),
                fact("high", FactCategory::Fun, 80.0),
            ],
        );
        state.set_items(
            ContentKind::Authors,
            vec![GeneratedItem::Author(AuthorQuote {
                id: "aut-1".into(),
                author_name: "Ann Handley".into(),
                author_name_key: "ann-handley".into(),
                author_title: None,
                quote: "Make the customer the hero.".into(),
                source: Some("Everybody Writes".into()),
                source_year: Some("2014".into()),
                relevance_score: 70.0,
            })],
        );

        let md = render_markdown(&state);
        let expected = "# AI\n\
\n## Quotes\n\n\
> \"Make the customer the hero.\"\n> -- Ann Handley (*Everybody Writes*, 2014)\n\n\
\n## Fun facts\n\n- high\n- low\n\
\n## Science facts\n\n- science\n\
\n## Newsletters\n\n- [The Batch](https://batch.example) (weekly)\n";
        assert_eq!(md, expected);
    }
}
