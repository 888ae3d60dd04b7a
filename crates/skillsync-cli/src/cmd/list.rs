use crate::output::{print_json, status_icon, status_suffix};
use anyhow::Context;
use skillsync_core::probe;
use std::path::Path;

pub fn run(skills_root: &Path, target: &Path, json: bool) -> anyhow::Result<()> {
    let statuses = probe::snapshot(skills_root, target).context("failed to scan skills")?;

    if json {
        return print_json(&statuses);
    }

    if statuses.is_empty() {
        println!("No skills found in {}", skills_root.display());
        return Ok(());
    }

    for s in &statuses {
        println!("{} {}{}", status_icon(s.status), s.name, status_suffix(s.status));
    }
    Ok(())
}
