use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier assigned by the remote store when an item is created.
/// Opaque to this system: numeric and uuid keys are both carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

/// Identifier of the authenticated user that owns an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl_id!(TodoId, OwnerId);

// Accepts `"7"` as well as `7`; hosted tables commonly use bigint keys.
impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(Self(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
        }))
    }
}
