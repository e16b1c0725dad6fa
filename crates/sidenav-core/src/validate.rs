//! Structural validation of a parsed sidebar index.
//!
//! The parser guarantees shape; these rules cover the properties a
//! well-formed generator run upholds: unique names per kind, non-empty
//! one-line summaries, identifier-shaped names.

use crate::index::{ItemKind, SidebarIndex};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

// Sidebar entries name documented items, so they follow identifier rules.
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    DuplicateName,
    EmptySummary,
    MultilineSummary,
    NonIdentifierName,
    EmptyGroup,
}

impl Rule {
    pub fn severity(&self) -> Severity {
        match self {
            Rule::DuplicateName | Rule::EmptySummary => Severity::Error,
            Rule::MultilineSummary | Rule::NonIdentifierName | Rule::EmptyGroup => {
                Severity::Warning
            }
        }
    }
}

/// A single rule violation, pointing at one entry (or one group for
/// group-level rules).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub rule: Rule,
    pub severity: Severity,
    pub kind: ItemKind,
    pub name: Option<String>,
    pub message: String,
}

impl Violation {
    fn entry(rule: Rule, kind: ItemKind, name: &str, message: String) -> Self {
        Violation {
            rule,
            severity: rule.severity(),
            kind,
            name: Some(name.to_string()),
            message,
        }
    }
}

/// Check every structural property; returns all violations found.
pub fn validate(index: &SidebarIndex) -> Vec<Violation> {
    let mut violations = Vec::new();
    for group in index.groups() {
        if group.items.is_empty() {
            violations.push(Violation {
                rule: Rule::EmptyGroup,
                severity: Rule::EmptyGroup.severity(),
                kind: group.kind,
                name: None,
                message: format!("{} group has no entries", group.kind.as_str()),
            });
        }

        let mut seen = HashSet::new();
        for item in &group.items {
            if !seen.insert(item.name.as_str()) {
                violations.push(Violation::entry(
                    Rule::DuplicateName,
                    group.kind,
                    &item.name,
                    format!("duplicate {} entry {:?}", group.kind.as_str(), item.name),
                ));
            }
            if item.summary.is_empty() {
                violations.push(Violation::entry(
                    Rule::EmptySummary,
                    group.kind,
                    &item.name,
                    format!("{:?} has an empty summary", item.name),
                ));
            } else if item.summary.contains('\n') {
                violations.push(Violation::entry(
                    Rule::MultilineSummary,
                    group.kind,
                    &item.name,
                    format!("summary of {:?} spans multiple lines", item.name),
                ));
            }
            if !IDENTIFIER.is_match(&item.name) {
                violations.push(Violation::entry(
                    Rule::NonIdentifierName,
                    group.kind,
                    &item.name,
                    format!("{:?} is not an identifier", item.name),
                ));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{ItemGroup, SidebarItem};

    fn item(name: &str, summary: &str) -> SidebarItem {
        SidebarItem { name: name.to_string(), summary: summary.to_string() }
    }

    fn index_of(kind: ItemKind, items: Vec<SidebarItem>) -> SidebarIndex {
        SidebarIndex::new(vec![ItemGroup { kind, items }])
    }

    #[test]
    fn test_clean_index() {
        let index = index_of(
            ItemKind::Fn,
            vec![item("json", "Decodes a JSON body."), item("form", "Decodes a form body.")],
        );
        assert!(validate(&index).is_empty());
    }

    #[test]
    fn test_duplicate_name_within_kind() {
        let index = index_of(
            ItemKind::Fn,
            vec![item("json", "First."), item("json", "Second.")],
        );
        let violations = validate(&index);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::DuplicateName);
        assert_eq!(violations[0].severity, Severity::Error);
        assert_eq!(violations[0].name.as_deref(), Some("json"));
    }

    #[test]
    fn test_same_name_in_different_kinds_is_fine() {
        let index = SidebarIndex::new(vec![
            ItemGroup { kind: ItemKind::Fn, items: vec![item("stream", "Extracts a stream.")] },
            ItemGroup { kind: ItemKind::Struct, items: vec![item("stream", "A stream type.")] },
        ]);
        assert!(validate(&index).is_empty());
    }

    #[test]
    fn test_empty_summary() {
        let index = index_of(ItemKind::Struct, vec![item("FullBody", "")]);
        let violations = validate(&index);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::EmptySummary);
    }

    #[test]
    fn test_multiline_summary_warns() {
        let index = index_of(ItemKind::Fn, vec![item("concat", "Line one.\nLine two.")]);
        let violations = validate(&index);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::MultilineSummary);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_non_identifier_name_warns() {
        let index = index_of(ItemKind::Fn, vec![item("content-length", "A summary.")]);
        let violations = validate(&index);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::NonIdentifierName);
    }

    #[test]
    fn test_empty_group_warns() {
        let index = index_of(ItemKind::Trait, vec![]);
        let violations = validate(&index);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, Rule::EmptyGroup);
        assert!(violations[0].name.is_none());
    }
}
