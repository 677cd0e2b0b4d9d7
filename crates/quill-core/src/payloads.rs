//! Raw payload shapes returned by the generation service.
//!
//! These mirror the structured-output contract sent to the service (see
//! `quill-schema`). Field names are `camelCase` on the wire. Payloads are not
//! trusted: scores are normalized and links screened before anything becomes
//! an accepted item.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a link field, treating non-strings and blank strings as absent.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails to produce any JSON value.
pub fn lenient_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

/// Decode a free-text metadata field that may arrive as a string or a number.
///
/// # Errors
///
/// Only fails if the underlying deserializer fails to produce any JSON value.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsPayload {
    pub authors: Vec<AuthorEntry>,
}

/// One author with N quotes. Flattened into N accepted items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorEntry {
    pub name: String,
    /// Role or short bio line, e.g. "CMO, Acme".
    #[serde(default)]
    pub title: Option<String>,
    pub quotes: Vec<QuoteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEntry {
    pub text: String,
    #[serde(default)]
    pub relevance_score: f64,
    /// Book, talk, or article the quote comes from.
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "Option<Value>")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "Option<Value>")]
    pub source_year: Option<String>,
}

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FactsPayload {
    pub fun_facts: Vec<FactEntry>,
    pub science_facts: Vec<FactEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FactEntry {
    pub text: String,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default, deserialize_with = "lenient_link")]
    #[schemars(with = "Option<Value>")]
    pub source_link: Option<String>,
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolsPayload {
    pub free_tools: Vec<ToolEntry>,
    pub paid_tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_link")]
    #[schemars(with = "Option<Value>")]
    pub url: Option<String>,
    #[serde(default)]
    pub relevance_score: f64,
}

// ---------------------------------------------------------------------------
// Newsletters / Podcasts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewslettersPayload {
    pub newsletters: Vec<NewsletterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterEntry {
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_link")]
    #[schemars(with = "Option<Value>")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "Option<Value>")]
    pub frequency: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodcastsPayload {
    pub podcasts: Vec<PodcastEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEntry {
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "lenient_link")]
    #[schemars(with = "Option<Value>")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "Option<Value>")]
    pub frequency: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub relevance_score: f64,
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Subject line and intro paragraph for the newsletter header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPayload {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
}
