//! Human-readable report formatting.

use crate::{LintReport, Outcome};

pub fn format_report(report: &LintReport) -> String {
    let mut out = String::new();

    out.push_str("\n╔══════════════════════════════════════════╗\n");
    out.push_str("║  Sidebar Index Lint                      ║\n");
    out.push_str("╠══════════════════════════════════════════╣\n");
    out.push_str(&format!("║  Root:    {:<31}║\n", truncate(&report.root, 31)));
    out.push_str(&format!("║  Files:   {:<31}║\n", report.files.len()));
    out.push_str(&format!("║  Verdict: {:<31}║\n", report.verdict.label()));
    out.push_str("╚══════════════════════════════════════════╝\n\n");

    out.push_str(&format!(
        "Indexes ({} files, {} entries):\n",
        report.files.len(),
        report.total_entries()
    ));
    out.push_str(&format!("  ✅ {} clean\n", report.count(Outcome::Clean)));
    out.push_str(&format!("  ⚠️  {} with warnings\n", report.count(Outcome::Warnings)));
    out.push_str(&format!(
        "  ❌ {} with errors or unparseable\n\n",
        report.count(Outcome::Errors) + report.count(Outcome::Broken)
    ));

    for file in &report.files {
        out.push_str(&format!("{} {}", file.outcome.symbol(), file.path));
        if file.outcome == Outcome::Broken {
            out.push('\n');
            if let Some(err) = &file.error {
                out.push_str(&format!("     Parse failed: {err}\n"));
            }
            continue;
        }
        let counts: Vec<String> = file
            .kind_counts
            .iter()
            .map(|(kind, n)| format!("{n} {kind}"))
            .collect();
        out.push_str(&format!(" ({})\n", counts.join(", ")));
        for (i, v) in file.violations.iter().enumerate() {
            out.push_str(&format!("     {}. {}\n", i + 1, v.message));
        }
    }
    out.push('\n');

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let tail: String = s.chars().rev().take(max - 1).collect();
        format!("…{}", tail.chars().rev().collect::<String>())
    }
}
