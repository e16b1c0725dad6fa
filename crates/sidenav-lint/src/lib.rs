pub mod report;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sidenav_core::{Severity, SidebarIndex, Violation, validate::validate};
use std::path::Path;
use walkdir::WalkDir;

/// File name the documentation generator uses for sidebar indexes.
pub const INDEX_FILE_NAME: &str = "sidebar-items.js";

/// Outcome for one index file, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Clean,
    Warnings,
    Errors,
    Broken,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Clean => "CLEAN",
            Outcome::Warnings => "WARNINGS",
            Outcome::Errors => "ERRORS",
            Outcome::Broken => "BROKEN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Clean => "✅",
            Outcome::Warnings => "⚠️",
            Outcome::Errors | Outcome::Broken => "❌",
        }
    }
}

/// Lint result for a single index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub outcome: Outcome,
    pub entry_count: usize,
    /// Entries per kind, in file order.
    pub kind_counts: Vec<(String, usize)>,
    pub violations: Vec<Violation>,
    /// Parse failure, when the file is broken.
    pub error: Option<String>,
}

/// Aggregated lint result over a file or tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub root: String,
    pub files: Vec<FileReport>,
    pub verdict: Outcome,
}

impl LintReport {
    pub fn total_entries(&self) -> usize {
        self.files.iter().map(|f| f.entry_count).sum()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}

/// Lint a single `sidebar-items.js` file or every one under a doc tree.
pub fn lint(path: &Path) -> Result<LintReport> {
    let files = if path.is_file() {
        vec![lint_file(path)?]
    } else {
        let mut index_paths = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && entry.file_name() == INDEX_FILE_NAME {
                index_paths.push(entry.into_path());
            }
        }
        if index_paths.is_empty() {
            bail!("no {INDEX_FILE_NAME} found under {}", path.display());
        }
        tracing::info!(count = index_paths.len(), "Discovered sidebar index files");

        let mut files = Vec::with_capacity(index_paths.len());
        for index_path in index_paths {
            files.push(lint_file(&index_path)?);
        }
        files
    };

    let verdict = files
        .iter()
        .map(|f| f.outcome)
        .max()
        .unwrap_or(Outcome::Clean);

    Ok(LintReport {
        root: path.display().to_string(),
        files,
        verdict,
    })
}

fn lint_file(path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let report = match SidebarIndex::parse(&content) {
        Ok(index) => {
            let violations = validate(&index);
            let outcome = if violations.iter().any(|v| v.severity == Severity::Error) {
                Outcome::Errors
            } else if violations.is_empty() {
                Outcome::Clean
            } else {
                Outcome::Warnings
            };
            FileReport {
                path: path.display().to_string(),
                outcome,
                entry_count: index.len(),
                kind_counts: index
                    .groups()
                    .iter()
                    .map(|g| (g.kind.as_str().to_string(), g.items.len()))
                    .collect(),
                violations,
                error: None,
            }
        }
        Err(err) => FileReport {
            path: path.display().to_string(),
            outcome: Outcome::Broken,
            entry_count: 0,
            kind_counts: Vec::new(),
            violations: Vec::new(),
            error: Some(err.to_string()),
        },
    };

    tracing::debug!(path = %report.path, outcome = report.outcome.label(), "Linted index file");
    Ok(report)
}
