use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// `skillsync.yaml` at the repository root. Optional: the symlink layout is
/// the only persisted state, so a bare skills repo works without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Override for the directory the assistant scans for installed skills.
    /// Defaults to `~/.claude/skills` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            target: None,
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Some(target) = &self.target {
            if target.is_relative() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "target '{}' is relative and will resolve against the repository root",
                        target.display()
                    ),
                });
            }
        }

        warnings
    }

    /// Resolve the effective target directory: an explicit override wins,
    /// then the config file, then `~/.claude/skills`. A relative config
    /// target resolves against the repository root.
    pub fn resolve_target(&self, root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(p) = explicit {
            return Ok(p.to_path_buf());
        }
        if let Some(t) = &self.target {
            if t.is_relative() {
                return Ok(root.join(t));
            }
            return Ok(t.clone());
        }
        paths::user_skills_target()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.version, 1);
        assert!(parsed.target.is_none());
    }

    #[test]
    fn target_not_serialized_when_absent() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(!yaml.contains("target"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.version, 1);
        assert!(cfg.target.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            version: 1,
            target: Some(PathBuf::from("/opt/assistant/skills")),
        };
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.target, Some(PathBuf::from("/opt/assistant/skills")));
    }

    #[test]
    fn config_with_target_parses() {
        let yaml = "version: 1\ntarget: /opt/assistant/skills\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.target, Some(PathBuf::from("/opt/assistant/skills")));
    }

    #[test]
    fn validate_relative_target_warns() {
        let cfg = Config {
            version: 1,
            target: Some(PathBuf::from("links")),
        };
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
        assert!(warnings[0].message.contains("relative"));
    }

    #[test]
    fn validate_absolute_target_no_warnings() {
        let cfg = Config {
            version: 1,
            target: Some(PathBuf::from("/opt/assistant/skills")),
        };
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn resolve_target_explicit_wins() {
        let cfg = Config {
            version: 1,
            target: Some(PathBuf::from("/from/config")),
        };
        let resolved = cfg
            .resolve_target(Path::new("/repo"), Some(Path::new("/explicit")))
            .unwrap();
        assert_eq!(resolved, PathBuf::from("/explicit"));
    }

    #[test]
    fn resolve_target_relative_joins_root() {
        let cfg = Config {
            version: 1,
            target: Some(PathBuf::from("links")),
        };
        let resolved = cfg.resolve_target(Path::new("/repo"), None).unwrap();
        assert_eq!(resolved, PathBuf::from("/repo/links"));
    }
}
