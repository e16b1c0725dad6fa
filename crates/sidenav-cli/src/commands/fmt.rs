use anyhow::Context;
use sidenav_core::SidebarIndex;
use std::path::Path;
use tracing::info;

pub fn fmt(path: &str, write: bool) -> anyhow::Result<()> {
    let file = Path::new(path);
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let index = SidebarIndex::parse(&content)
        .with_context(|| format!("parsing {}", file.display()))?;

    let serialized = index.to_js();
    if write {
        std::fs::write(file, format!("{serialized}\n"))?;
        info!("Rewrote {} ({} entries)", file.display(), index.len());
        println!("✓ Rewrote {}", file.display());
    } else {
        println!("{serialized}");
    }
    Ok(())
}

pub fn show(path: &str) -> anyhow::Result<()> {
    let file = Path::new(path);
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let index = SidebarIndex::parse(&content)
        .with_context(|| format!("parsing {}", file.display()))?;

    for group in index.groups() {
        println!("{} ({}):", group.kind.display_name(), group.items.len());
        for item in &group.items {
            println!("  {:<24} {}", item.name, item.summary);
        }
    }
    println!("\n{} entries, fingerprint {}", index.len(), index.fingerprint());
    Ok(())
}
