use crate::error::{Result, SkillsyncError};
use crate::{io, paths};
use std::io::ErrorKind;
use std::path::Path;

// ---------------------------------------------------------------------------
// Platform symlink primitives
// ---------------------------------------------------------------------------

#[cfg(unix)]
fn symlink_dir(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn symlink_dir(source: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(source, link)
}

#[cfg(unix)]
fn remove_symlink(link: &Path) -> std::io::Result<()> {
    std::fs::remove_file(link)
}

#[cfg(windows)]
fn remove_symlink(link: &Path) -> std::io::Result<()> {
    // Directory symlinks are directory entries on windows.
    std::fs::remove_dir(link).or_else(|_| std::fs::remove_file(link))
}

// ---------------------------------------------------------------------------
// Link operator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlinkOutcome {
    Removed,
    NotLinked,
}

/// Create (or replace) the symlink `target/<name>` → `source/<name>`.
///
/// Never deletes or overwrites a non-symlink occupant: that path fails with
/// `Conflict` and the filesystem is left untouched. An existing symlink is
/// replaced regardless of where it currently points.
pub fn link(skills_root: &Path, target_dir: &Path, name: &str) -> Result<()> {
    paths::validate_name(name)?;

    let source = paths::skill_source(skills_root, name);
    if !source.is_dir() {
        return Err(SkillsyncError::SkillNotFound(name.to_string()));
    }

    io::ensure_dir(target_dir)?;

    let dest = paths::link_path(target_dir, name);
    match std::fs::symlink_metadata(&dest) {
        Ok(meta) => {
            if !meta.file_type().is_symlink() {
                return Err(SkillsyncError::Conflict(dest));
            }
            remove_symlink(&dest)?;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    symlink_dir(&source, &dest)?;
    Ok(())
}

/// Remove the symlink `target/<name>` if present.
///
/// Absent entries are a no-op (`NotLinked`), so calling twice never errors.
/// A non-symlink occupant fails with `Conflict` and is not touched.
pub fn unlink(target_dir: &Path, name: &str) -> Result<UnlinkOutcome> {
    paths::validate_name(name)?;

    let dest = paths::link_path(target_dir, name);
    match std::fs::symlink_metadata(&dest) {
        Ok(meta) => {
            if !meta.file_type().is_symlink() {
                return Err(SkillsyncError::Conflict(dest));
            }
            remove_symlink(&dest)?;
            Ok(UnlinkOutcome::Removed)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(UnlinkOutcome::NotLinked),
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
