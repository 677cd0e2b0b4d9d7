//! Central schema registry for generation payloads.
//!
//! The `SchemaRegistry` builds JSON Schemas from quill-core payload types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use quill_core::enums::ContentKind;
use quill_core::payloads::{
    AuthorsPayload, FactsPayload, HeaderPayload, NewslettersPayload, PodcastsPayload, ToolsPayload,
};
use schemars::schema_for;

use crate::error::SchemaError;

/// Registry name of the header payload schema.
pub const HEADER_SCHEMA: &str = "header";

/// Central store of all payload schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry with one schema per content kind plus the header.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, ContentKind::Authors.as_str(), AuthorsPayload);
        register!(schemas, ContentKind::Facts.as_str(), FactsPayload);
        register!(schemas, ContentKind::Tools.as_str(), ToolsPayload);
        register!(schemas, ContentKind::Newsletters.as_str(), NewslettersPayload);
        register!(schemas, ContentKind::Podcasts.as_str(), PodcastsPayload);
        register!(schemas, HEADER_SCHEMA, HeaderPayload);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Schema for the payload of `kind`.
    ///
    /// Every kind is registered in [`Self::new`], so this only returns `None`
    /// for a registry built some other way.
    #[must_use]
    pub fn for_kind(&self, kind: ContentKind) -> Option<&serde_json::Value> {
        self.get(kind.as_str())
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
