use anyhow::Context;
use skillsync_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing skills repository in: {}", root.display());

    let skills_dir = paths::skills_root(root);
    let skills_existed = skills_dir.is_dir();
    io::ensure_dir(&skills_dir)
        .with_context(|| format!("failed to create {}", skills_dir.display()))?;
    if skills_existed {
        println!("  exists:  skills/");
    } else {
        println!("  created: skills/");
    }

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("  exists:  skillsync.yaml");
        let cfg = Config::load(root).context("failed to load skillsync.yaml")?;
        for warning in cfg.validate() {
            println!("  warning: {}", warning.message);
        }
    } else {
        Config::default()
            .save(root)
            .context("failed to write skillsync.yaml")?;
        println!("  created: skillsync.yaml");
    }

    println!("\nNext: add a skill directory under skills/, then run `skills` to link it.");
    Ok(())
}
