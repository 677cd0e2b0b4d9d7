//! Item id generation.
//!
//! Ids have the form `<prefix>-<8 hex chars>`, e.g. `nws-3fa9c21b`. The prefix
//! comes from [`ContentKind::id_prefix`].

use crate::enums::ContentKind;
use crate::errors::CoreError;

/// Generate a fresh id for an item of `kind`.
///
/// # Errors
///
/// Returns [`CoreError::IdGeneration`] if the OS random source fails.
pub fn new_id(kind: ContentKind) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{}-{suffix}", kind.id_prefix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_shape(kind: ContentKind, id: &str) -> bool {
        id.strip_prefix(kind.id_prefix())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
    }

    #[test]
    fn generated_ids_have_kind_prefix() {
        for kind in ContentKind::ALL {
            let id = new_id(kind).unwrap();
            assert!(has_shape(kind, &id), "bad id {id} for {kind}");
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = new_id(ContentKind::Facts).unwrap();
        let b = new_id(ContentKind::Facts).unwrap();
        assert_ne!(a, b);
    }
}
