use anyhow::bail;
use sidenav_core::{IndexManifest, Severity, manifest::MANIFEST_FILE_NAME, validate::validate};
use sidenav_lint::INDEX_FILE_NAME;
use std::path::Path;
use tracing::info;

pub fn init(path: &str, module: &str) -> anyhow::Result<()> {
    let dir = Path::new(path);
    let manifest = IndexManifest::scaffold(module);
    let output = dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&output, manifest.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}

pub fn build(path: &str, out: Option<&str>) -> anyhow::Result<()> {
    let dir = Path::new(path);
    let manifest = IndexManifest::from_file(&dir.join(MANIFEST_FILE_NAME))?;
    let index = manifest.build_index();

    info!("Building index for {} ({} entries)", manifest.index.module, index.len());

    let errors: Vec<_> = validate(&index)
        .into_iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    if !errors.is_empty() {
        for v in &errors {
            eprintln!("error: {}", v.message);
        }
        bail!("manifest for {} has {} error(s)", manifest.index.module, errors.len());
    }

    let output = match out {
        Some(out) => Path::new(out).to_path_buf(),
        None => dir.join(INDEX_FILE_NAME),
    };
    std::fs::write(&output, format!("{}\n", index.to_js()))?;
    println!("✓ Built {} ({} entries)", output.display(), index.len());
    println!("  Module:  {}", manifest.index.module);
    println!("  SHA256:  {}", index.fingerprint());
    Ok(())
}
