//! Shopping Item Domain Models

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// =============================================================================
// Item Domain Models
// =============================================================================

/// A single entry on the shopping list.
///
/// Missing or `null` fields take their default, so `{}` decodes into an
/// unnamed item. The `id` is always replaced by the store on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identifier assigned by the store
    #[serde(default, deserialize_with = "null_as_default", alias = "Id", alias = "ID")]
    pub id: Uuid,

    /// Name of the item
    #[serde(default, deserialize_with = "null_as_default", alias = "Name", alias = "NAME")]
    pub name: String,
}

impl Item {
    /// Creates an item with a freshly generated v4 identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Reads a JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_fields_take_defaults() {
        let item: Item = serde_json::from_str(r#"{"id":null,"name":null}"#).unwrap();
        assert!(item.id.is_nil());
        assert_eq!(item.name, "");
    }

    #[test]
    fn test_capitalized_keys() {
        let item: Item = serde_json::from_str(r#"{"Name":"milk"}"#).unwrap();
        assert_eq!(item.name, "milk");
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        assert!(serde_json::from_str::<Item>(r#"{"id":"nope"}"#).is_err());
    }
}
