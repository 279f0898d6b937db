//! Stable item addressing.
//!
//! Every checklist item is addressed by the pair (section id, zero-based
//! position within its section), carried as an [`ItemKey`]. Keys are derived
//! on demand from the section data and never stored as separate mutable
//! state, so they stay valid across insertions in *other* sections and never
//! collide as long as section ids are unique and item order is stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TicklistError;

/// Stable identifier for one checklist item.
///
/// Serialized as the token `"<sectionId>:<index>"`. Distinct indices within a
/// section never collide, and distinct sections never share a namespace.
///
/// # Example
///
/// ```
/// use ticklist::ItemKey;
///
/// let key = ItemKey::new("auth", 2);
/// assert_eq!(key.to_string(), "auth:2");
/// assert_eq!(key.section(), "auth");
/// assert_eq!(key.index(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    /// Id of the section containing the item
    section: String,
    /// Zero-based position of the item within its section
    index: usize,
}

impl ItemKey {
    /// Derive the key for an item from its section id and position.
    ///
    /// Pure and total: any (section id, index) pair is a valid key, whether
    /// or not a matching item currently exists. Validity against actual
    /// section data is the store's concern, not the key's.
    #[must_use]
    pub fn new(section_id: impl Into<String>, index: usize) -> Self {
        Self {
            section: section_id.into(),
            index,
        }
    }

    /// Get the section id.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Get the zero-based item index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.index)
    }
}

impl FromStr for ItemKey {
    type Err = TicklistError;

    /// Parse a `"<sectionId>:<index>"` token.
    ///
    /// Splits on the LAST colon: the index segment is purely numeric, so
    /// section ids containing `:` round-trip unambiguously.
    ///
    /// # Errors
    ///
    /// Returns [`TicklistError::InvalidKey`] if the token has no colon or its
    /// final segment is not a non-negative integer.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (section, index_part) = token
            .rsplit_once(':')
            .ok_or_else(|| TicklistError::invalid_key(token))?;

        let index: usize = index_part
            .parse()
            .map_err(|_| TicklistError::invalid_key(token))?;

        Ok(Self {
            section: section.to_string(),
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_key_token_form() {
        let key = ItemKey::new("s1", 0);
        assert_eq!(key.to_string(), "s1:0");
    }

    #[test]
    fn test_key_round_trip() {
        let key = ItemKey::new("deploy", 7);
        let parsed: ItemKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_key_round_trip_with_colon_in_section_id() {
        let key = ItemKey::new("phase:1", 2);
        assert_eq!(key.to_string(), "phase:1:2");

        let parsed: ItemKey = "phase:1:2".parse().unwrap();
        assert_eq!(parsed.section(), "phase:1");
        assert_eq!(parsed.index(), 2);
    }

    #[test]
    fn test_key_parse_no_colon() {
        let result = ItemKey::from_str("nocolon");
        assert!(matches!(result, Err(TicklistError::InvalidKey { .. })));
    }

    #[test]
    fn test_key_parse_non_numeric_index() {
        let result = ItemKey::from_str("s1:abc");
        assert!(result.is_err());

        let result = ItemKey::from_str("s1:-1");
        assert!(result.is_err());
    }

    #[test]
    fn test_key_injective_within_section() {
        let a = ItemKey::new("s1", 0);
        let b = ItemKey::new("s1", 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_injective_across_sections() {
        // The same index under different sections must never collide
        let mut keys = HashSet::new();
        for section in ["basics", "auth", "deploy"] {
            for index in 0..4 {
                assert!(keys.insert(ItemKey::new(section, index)));
            }
        }
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_key_hash_map_key() {
        let mut map = HashMap::new();
        let key = ItemKey::new("s1", 3);
        map.insert(key.clone(), "value");
        assert_eq!(map.get(&key), Some(&"value"));
    }

    #[test]
    fn test_key_serde_round_trip() {
        let key = ItemKey::new("auth", 1);
        let json = serde_json::to_string(&key).unwrap();
        let back: ItemKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
