//! # quill-core
//!
//! Core types shared across all Quill crates:
//! - [`ContentKind`](enums::ContentKind) and the run/log enums
//! - Accepted item variants per kind ([`GeneratedItem`](items::GeneratedItem))
//! - Raw payload shapes returned by the generation service
//! - Per-project generation state
//! - Relevance-score normalization and id generation
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod ids;
pub mod items;
pub mod payloads;
pub mod project;
pub mod score;
