use anyhow::bail;
use sidenav_lint::Outcome;
use std::path::Path;

pub fn check(path: &str, format: &str) -> anyhow::Result<()> {
    let report = sidenav_lint::lint(Path::new(path))?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", sidenav_lint::report::format_report(&report));
        }
    }

    if report.verdict >= Outcome::Errors {
        let failing = report.count(Outcome::Errors) + report.count(Outcome::Broken);
        bail!("{failing} index file(s) failed lint");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_clean_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sidebar-items.js"),
            r#"initSidebarItems({"fn":[["bind","Bind a local address."]]});"#,
        )
        .unwrap();

        check(dir.path().to_str().unwrap(), "text").unwrap();
        check(dir.path().to_str().unwrap(), "json").unwrap();
    }

    #[test]
    fn test_check_fails_on_broken_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sidebar-items.js"), "window.SIDEBAR = {};").unwrap();

        let result = check(dir.path().to_str().unwrap(), "text");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failed lint"));
    }
}
