use skillsync_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the skills repository root.
///
/// Priority:
/// 1. `--root` flag / `SKILLS_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `skillsync.yaml`
/// 3. Walk upward from `cwd` looking for a `skills/` directory
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Walk upward looking for skillsync.yaml
    let mut dir = cwd.clone();
    loop {
        if dir.join(paths::CONFIG_FILE).is_file() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    // Walk upward looking for skills/
    let mut dir = cwd.clone();
    loop {
        if dir.join(paths::SKILLS_DIR).is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn explicit_root_ignores_markers() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("skillsync.yaml"), "version: 1\n").unwrap();
        let other = TempDir::new().unwrap();
        let result = resolve_root(Some(other.path()));
        assert_eq!(result, other.path());
    }
}
