//! sidenav.toml manifest parser.
//!
//! The manifest is the hand-maintained input to `sidenav build`: it names
//! the documented module and lists its entries, and builds into a
//! canonically ordered [`SidebarIndex`].

use crate::index::{ItemGroup, ItemKind, SidebarIndex, SidebarItem};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "sidenav.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub index: IndexSection,
    #[serde(default, rename = "item")]
    pub items: Vec<ManifestItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSection {
    /// Module path the index belongs to, e.g. "warp::filters::body".
    pub module: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestItem {
    pub kind: ItemKind,
    pub name: String,
    pub summary: String,
}

impl IndexManifest {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest: IndexManifest = toml::from_str(&content)?;
        Ok(manifest)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a minimal manifest for the given module.
    pub fn scaffold(module: &str) -> Self {
        IndexManifest {
            index: IndexSection {
                module: module.to_string(),
                title: None,
            },
            items: vec![ManifestItem {
                kind: ItemKind::Fn,
                name: "example".to_string(),
                summary: "Describe this item in one line.".to_string(),
            }],
        }
    }

    /// Build the index in canonical order: groups by wire key, entries by
    /// name, regardless of manifest order.
    pub fn build_index(&self) -> SidebarIndex {
        let mut groups: Vec<ItemGroup> = Vec::new();
        for entry in &self.items {
            let item = SidebarItem {
                name: entry.name.clone(),
                summary: entry.summary.clone(),
            };
            match groups.iter_mut().find(|g| g.kind == entry.kind) {
                Some(group) => group.items.push(item),
                None => groups.push(ItemGroup { kind: entry.kind, items: vec![item] }),
            }
        }
        let mut index = SidebarIndex::new(groups);
        index.sort();
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold() {
        let manifest = IndexManifest::scaffold("warp::filters::body");
        let toml_str = manifest.to_toml_string().unwrap();
        assert!(toml_str.contains("warp::filters::body"));
        assert!(toml_str.contains("example"));
    }

    #[test]
    fn test_parse_minimal() {
        let toml_str = r#"
[index]
module = "mylib::net"
"#;
        let manifest: IndexManifest = toml::from_str(toml_str).unwrap();
        assert_eq!(manifest.index.module, "mylib::net");
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn test_build_index_sorts_canonically() {
        let toml_str = r#"
[index]
module = "mylib::net"

[[item]]
kind = "struct"
name = "Listener"
summary = "A bound listener."

[[item]]
kind = "fn"
name = "serve"
summary = "Run the accept loop."

[[item]]
kind = "fn"
name = "bind"
summary = "Bind a local address."
"#;
        let manifest: IndexManifest = toml::from_str(toml_str).unwrap();
        let index = manifest.build_index();

        assert_eq!(index.len(), 3);
        let groups = index.groups();
        assert_eq!(groups[0].kind, ItemKind::Fn);
        assert_eq!(groups[0].items[0].name, "bind");
        assert_eq!(groups[0].items[1].name, "serve");
        assert_eq!(groups[1].kind, ItemKind::Struct);
    }

    #[test]
    fn test_kind_round_trips_through_toml() {
        let manifest = IndexManifest {
            index: IndexSection { module: "m".to_string(), title: Some("M".to_string()) },
            items: vec![ManifestItem {
                kind: ItemKind::TypeAlias,
                name: "Result".to_string(),
                summary: "Alias with a default error type.".to_string(),
            }],
        };
        let toml_str = manifest.to_toml_string().unwrap();
        assert!(toml_str.contains("kind = \"type\""));
        let parsed: IndexManifest = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.items[0].kind, ItemKind::TypeAlias);
    }
}
