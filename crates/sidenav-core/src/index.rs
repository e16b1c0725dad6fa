//! Sidebar index data model.
//!
//! A sidebar index is the navigation-pane listing a documentation generator
//! emits next to each rendered module: item names grouped by kind, each with
//! a one-line summary. Entries are descriptive text only; the index carries
//! no behavior and is regenerated wholesale on every documentation build.

use serde::{Deserialize, Serialize};

/// Kind of a documented item, as keyed in the generated index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Mod,
    Struct,
    Enum,
    Union,
    Fn,
    Trait,
    #[serde(rename = "type")]
    TypeAlias,
    Static,
    Constant,
    Macro,
    Primitive,
    Keyword,
}

impl ItemKind {
    /// All kinds a supported generator emits, in wire-key order.
    pub const ALL: [ItemKind; 12] = [
        ItemKind::Constant,
        ItemKind::Enum,
        ItemKind::Fn,
        ItemKind::Keyword,
        ItemKind::Macro,
        ItemKind::Mod,
        ItemKind::Primitive,
        ItemKind::Static,
        ItemKind::Struct,
        ItemKind::Trait,
        ItemKind::TypeAlias,
        ItemKind::Union,
    ];

    pub fn parse(key: &str) -> Option<ItemKind> {
        match key {
            "mod" => Some(ItemKind::Mod),
            "struct" => Some(ItemKind::Struct),
            "enum" => Some(ItemKind::Enum),
            "union" => Some(ItemKind::Union),
            "fn" => Some(ItemKind::Fn),
            "trait" => Some(ItemKind::Trait),
            "type" => Some(ItemKind::TypeAlias),
            "static" => Some(ItemKind::Static),
            "constant" => Some(ItemKind::Constant),
            "macro" => Some(ItemKind::Macro),
            "primitive" => Some(ItemKind::Primitive),
            "keyword" => Some(ItemKind::Keyword),
            _ => None,
        }
    }

    /// The key used in the generated file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Mod => "mod",
            ItemKind::Struct => "struct",
            ItemKind::Enum => "enum",
            ItemKind::Union => "union",
            ItemKind::Fn => "fn",
            ItemKind::Trait => "trait",
            ItemKind::TypeAlias => "type",
            ItemKind::Static => "static",
            ItemKind::Constant => "constant",
            ItemKind::Macro => "macro",
            ItemKind::Primitive => "primitive",
            ItemKind::Keyword => "keyword",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Mod => "Module",
            ItemKind::Struct => "Struct",
            ItemKind::Enum => "Enum",
            ItemKind::Union => "Union",
            ItemKind::Fn => "Function",
            ItemKind::Trait => "Trait",
            ItemKind::TypeAlias => "Type Alias",
            ItemKind::Static => "Static",
            ItemKind::Constant => "Constant",
            ItemKind::Macro => "Macro",
            ItemKind::Primitive => "Primitive",
            ItemKind::Keyword => "Keyword",
        }
    }
}

/// One entry in the index: a name and its one-line summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub name: String,
    pub summary: String,
}

/// All entries of one kind, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub kind: ItemKind,
    pub items: Vec<SidebarItem>,
}

/// A parsed sidebar index. Group order is preserved as encountered so that
/// re-serialization reproduces the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarIndex {
    groups: Vec<ItemGroup>,
}

impl SidebarIndex {
    pub fn new(groups: Vec<ItemGroup>) -> Self {
        SidebarIndex { groups }
    }

    pub fn groups(&self) -> &[ItemGroup] {
        &self.groups
    }

    pub fn group(&self, kind: ItemKind) -> Option<&ItemGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Flat iterator over all entries with their kind.
    pub fn entries(&self) -> impl Iterator<Item = (ItemKind, &SidebarItem)> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter().map(move |item| (g.kind, item)))
    }

    /// Total entry count across all kinds.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.items.is_empty())
    }

    /// Sort into the generator's canonical order: groups by wire key,
    /// entries by name within each group.
    pub fn sort(&mut self) {
        for group in &mut self.groups {
            group.items.sort_by(|a, b| a.name.cmp(&b.name));
        }
        self.groups.sort_by(|a, b| a.kind.as_str().cmp(b.kind.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> SidebarItem {
        SidebarItem {
            name: name.to_string(),
            summary: format!("Summary for {name}."),
        }
    }

    #[test]
    fn test_kind_keys_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ItemKind::parse("widget"), None);
    }

    #[test]
    fn test_entries_and_len() {
        let index = SidebarIndex::new(vec![
            ItemGroup { kind: ItemKind::Fn, items: vec![item("json"), item("form")] },
            ItemGroup { kind: ItemKind::Struct, items: vec![item("FullBody")] },
        ]);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
        let fns: Vec<_> = index
            .entries()
            .filter(|(kind, _)| *kind == ItemKind::Fn)
            .map(|(_, item)| item.name.as_str())
            .collect();
        assert_eq!(fns, vec!["json", "form"]);
    }

    #[test]
    fn test_sort_is_canonical() {
        let mut index = SidebarIndex::new(vec![
            ItemGroup { kind: ItemKind::Struct, items: vec![item("StreamBuf"), item("BodyStream")] },
            ItemGroup { kind: ItemKind::Fn, items: vec![item("stream"), item("concat")] },
        ]);
        index.sort();
        assert_eq!(index.groups()[0].kind, ItemKind::Fn);
        assert_eq!(index.groups()[0].items[0].name, "concat");
        assert_eq!(index.groups()[1].items[0].name, "BodyStream");
    }
}
