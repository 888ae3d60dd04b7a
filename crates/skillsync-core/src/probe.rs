use crate::error::{Result, SkillsyncError};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

// ---------------------------------------------------------------------------
// LinkStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// No entry at `target/<name>`, a non-symlink occupant, or a symlink
    /// pointing at a different (but valid) path.
    Unlinked,
    /// A symlink at `target/<name>` whose raw target equals the skill's
    /// source path exactly. Path equality, not realpath equality.
    Linked,
    /// A dangling symlink, or one whose inspection failed.
    Broken,
}

impl LinkStatus {
    pub fn is_linked(self) -> bool {
        self == LinkStatus::Linked
    }

    pub fn is_broken(self) -> bool {
        self == LinkStatus::Broken
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillStatus {
    pub name: String,
    pub status: LinkStatus,
}

// ---------------------------------------------------------------------------
// Probe
// ---------------------------------------------------------------------------

/// List skill names: the subdirectories of the skills root, sorted.
/// Plain files in the root (including `skillsync.yaml`) are not skills.
pub fn list_skills(skills_root: &Path) -> Result<Vec<String>> {
    if !skills_root.is_dir() {
        return Err(SkillsyncError::SkillsRootMissing(skills_root.to_path_buf()));
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(skills_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Inspect the link state for one skill. Read-only; never follows the link.
pub fn status_of(skills_root: &Path, target_dir: &Path, name: &str) -> LinkStatus {
    let link = target_dir.join(name);

    let meta = match std::fs::symlink_metadata(&link) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return LinkStatus::Unlinked,
        Err(_) => return LinkStatus::Broken,
    };

    // A real file or directory occupying the slot is "not linked by us".
    // Mutating callers re-check this and refuse to touch it.
    if !meta.file_type().is_symlink() {
        return LinkStatus::Unlinked;
    }

    let dest = match std::fs::read_link(&link) {
        Ok(d) => d,
        Err(_) => return LinkStatus::Broken,
    };

    if dest == skills_root.join(name) {
        return LinkStatus::Linked;
    }

    // Foreign symlink: re-linkable if its target still resolves, broken if
    // it dangles. Relative targets resolve against the link's directory.
    let resolved = if dest.is_absolute() {
        dest
    } else {
        target_dir.join(&dest)
    };
    if resolved.exists() {
        LinkStatus::Unlinked
    } else {
        LinkStatus::Broken
    }
}

/// Status for every discovered skill, in discovery (sorted) order.
pub fn snapshot(skills_root: &Path, target_dir: &Path) -> Result<Vec<SkillStatus>> {
    let names = list_skills(skills_root)?;
    Ok(names
        .into_iter()
        .map(|name| {
            let status = status_of(skills_root, target_dir, &name);
            SkillStatus { name, status }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
