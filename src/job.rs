//! Copy job configuration data structures
//!
//! A job is the mapping handed to the copier: where the package comes from
//! (`source_pkg`), and where it goes (`pkg_path`, or a name derived under
//! `cache_dir`). Jobs arrive either from CLI arguments or from a YAML/JSON
//! job file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PkgcopyError, Result};

/// A single copy job: one source package, one destination
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CopyJob {
    /// Package path or glob pattern to copy from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_pkg: Option<String>,

    /// Explicit destination path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg_path: Option<String>,

    /// Cache directory used to derive the destination when `pkg_path` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

impl CopyJob {
    /// Parse a job from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let job: Self = serde_yaml::from_str(yaml)?;
        Ok(job)
    }

    /// Parse a job from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let job: Self = serde_json::from_str(json)?;
        Ok(job)
    }

    /// Load a job from a file, picking the format from the extension
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PkgcopyError::JobNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| PkgcopyError::JobParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let parsed = if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        parsed.map_err(|e| match e {
            PkgcopyError::JobParseFailed { reason, .. } => PkgcopyError::JobParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Validate that the job can be executed
    ///
    /// A job needs a non-empty source pattern, and either an explicit
    /// destination or a cache directory to derive one from. Runs before any
    /// filesystem access so a broken job never triggers a copy.
    pub fn validate(&self) -> Result<()> {
        if self.source_pkg.as_deref().is_none_or(str::is_empty) {
            return Err(PkgcopyError::JobInvalid {
                message: "source_pkg is required".to_string(),
            });
        }

        if self.pkg_path.as_deref().is_none_or(str::is_empty) && self.cache_dir.is_none() {
            return Err(PkgcopyError::JobInvalid {
                message: "either pkg_path or cache_dir is required".to_string(),
            });
        }

        Ok(())
    }
}
