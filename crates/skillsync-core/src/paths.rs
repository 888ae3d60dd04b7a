use crate::error::{Result, SkillsyncError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SKILLS_DIR: &str = "skills";
pub const CONFIG_FILE: &str = "skillsync.yaml";

pub const CLAUDE_DIR: &str = ".claude";
pub const CLAUDE_SKILLS_DIR: &str = ".claude/skills";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn skills_root(root: &Path) -> PathBuf {
    root.join(SKILLS_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn skill_source(skills_root: &Path, name: &str) -> PathBuf {
    skills_root.join(name)
}

pub fn link_path(target_dir: &Path, name: &str) -> PathBuf {
    target_dir.join(name)
}

/// Default target directory scanned by the assistant: `~/.claude/skills`.
pub fn user_skills_target() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(SkillsyncError::HomeNotFound)?;
    Ok(home.join(CLAUDE_SKILLS_DIR))
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._\-]*$").unwrap())
}

/// A skill name doubles as a filename under the target directory, so it must
/// never contain path separators or traverse upward.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 255 || name.contains("..") || !name_re().is_match(name) {
        return Err(SkillsyncError::InvalidName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
