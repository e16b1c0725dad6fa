//! Wire format for generated sidebar indexes.
//!
//! The generator emits one `sidebar-items.js` per documented module:
//! a single `initSidebarItems({...});` call whose payload maps kind keys to
//! arrays of `[name, summary]` string pairs. The parser is strict — an
//! unknown kind key or a malformed pair means the file was not produced by
//! a supported generator — and the serializer reproduces the generator's
//! compact shape byte for byte.

use crate::index::{ItemGroup, ItemKind, SidebarIndex, SidebarItem};
use serde::de::{MapAccess, Visitor};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

const CALL_PREFIX: &str = "initSidebarItems(";
const CALL_SUFFIX: &str = ");";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing initSidebarItems(...) wrapper")]
    MissingWrapper,
    #[error("unterminated initSidebarItems call")]
    UnterminatedCall,
    #[error("invalid index payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("index payload is not an object")]
    PayloadNotObject,
    #[error("unknown item kind: {0:?}")]
    UnknownKind(String),
    #[error("duplicate kind key: {0:?}")]
    DuplicateKind(String),
    #[error("malformed entry under {kind:?}: expected a [name, summary] string pair")]
    MalformedEntry { kind: String },
}

/// Payload object as a pair list. A plain map would collapse duplicate kind
/// keys last-wins, so deserialization keeps every pair it sees.
struct RawGroups(Vec<(String, Value)>);

impl<'de> serde::Deserialize<'de> for RawGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RawGroupsVisitor;

        impl<'de> Visitor<'de> for RawGroupsVisitor {
            type Value = RawGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from kind keys to entry arrays")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawGroups, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some(pair) = map.next_entry()? {
                    pairs.push(pair);
                }
                Ok(RawGroups(pairs))
            }
        }

        deserializer.deserialize_map(RawGroupsVisitor)
    }
}

impl SidebarIndex {
    /// Parse the contents of a `sidebar-items.js` file.
    ///
    /// Surrounding whitespace is tolerated; anything else outside the call
    /// is rejected.
    pub fn parse(src: &str) -> Result<SidebarIndex, ParseError> {
        let call = src.trim();
        let rest = call
            .strip_prefix(CALL_PREFIX)
            .ok_or(ParseError::MissingWrapper)?;
        let payload = rest
            .strip_suffix(CALL_SUFFIX)
            .ok_or(ParseError::UnterminatedCall)?;

        let raw: RawGroups = match serde_json::from_str(payload) {
            Ok(raw) => raw,
            Err(err) => {
                if let Ok(value) = serde_json::from_str::<Value>(payload) {
                    if !value.is_object() {
                        return Err(ParseError::PayloadNotObject);
                    }
                }
                return Err(ParseError::Json(err));
            }
        };

        let mut groups: Vec<ItemGroup> = Vec::with_capacity(raw.0.len());
        for (key, entries) in &raw.0 {
            let kind =
                ItemKind::parse(key).ok_or_else(|| ParseError::UnknownKind(key.clone()))?;
            if groups.iter().any(|g| g.kind == kind) {
                return Err(ParseError::DuplicateKind(key.clone()));
            }
            let entries = entries
                .as_array()
                .ok_or_else(|| ParseError::MalformedEntry { kind: key.clone() })?;

            let mut items = Vec::with_capacity(entries.len());
            for entry in entries {
                let pair = entry.as_array().filter(|p| p.len() == 2);
                let (name, summary) = match pair {
                    Some(pair) => match (pair[0].as_str(), pair[1].as_str()) {
                        (Some(name), Some(summary)) => (name, summary),
                        _ => return Err(ParseError::MalformedEntry { kind: key.clone() }),
                    },
                    None => return Err(ParseError::MalformedEntry { kind: key.clone() }),
                };
                items.push(SidebarItem {
                    name: name.to_string(),
                    summary: summary.to_string(),
                });
            }
            groups.push(ItemGroup { kind, items });
        }

        Ok(SidebarIndex::new(groups))
    }

    /// Serialize back to the generator's shape: compact JSON, groups in
    /// stored order, wrapped in `initSidebarItems(...);` with no trailing
    /// newline.
    pub fn to_js(&self) -> String {
        let mut payload = serde_json::Map::new();
        for group in self.groups() {
            let entries: Vec<Value> = group
                .items
                .iter()
                .map(|item| {
                    Value::Array(vec![
                        Value::String(item.name.clone()),
                        Value::String(item.summary.clone()),
                    ])
                })
                .collect();
            payload.insert(group.kind.as_str().to_string(), Value::Array(entries));
        }
        format!("{CALL_PREFIX}{}{CALL_SUFFIX}", Value::Object(payload))
    }

    /// SHA-256 hex digest of the serialized index, for cheap
    /// regenerated-or-not comparisons between doc builds.
    pub fn fingerprint(&self) -> String {
        let hash = Sha256::digest(self.to_js().as_bytes());
        hex::encode(hash)
    }
}
