use crate::output::print_json;
use anyhow::Context;
use skillsync_core::{linker, paths};
use std::path::Path;

pub fn run(skills_root: &Path, target: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    linker::link(skills_root, target, name).with_context(|| format!("failed to link '{name}'"))?;

    if json {
        print_json(&serde_json::json!({
            "name": name,
            "linked": true,
        }))?;
    } else {
        println!(
            "Linked '{name}' -> {}",
            paths::link_path(target, name).display()
        );
    }
    Ok(())
}
