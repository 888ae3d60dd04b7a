use crate::output::print_json;
use anyhow::Context;
use skillsync_core::linker::{self, UnlinkOutcome};
use std::path::Path;

pub fn run(target: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let outcome =
        linker::unlink(target, name).with_context(|| format!("failed to unlink '{name}'"))?;

    if json {
        print_json(&serde_json::json!({
            "name": name,
            "removed": outcome == UnlinkOutcome::Removed,
        }))?;
    } else {
        match outcome {
            UnlinkOutcome::Removed => println!("Unlinked '{name}'."),
            UnlinkOutcome::NotLinked => println!("Skill '{name}' is not linked."),
        }
    }
    Ok(())
}
