//! The copy operation: resolve one source, pick one destination, copy once
//!
//! Resolution and destination derivation are computed into a [`CopyPlan`]
//! first; executing the plan performs the single filesystem write. The split
//! keeps dry-run free of side effects and lets tests pin down the exact
//! (source, dest) pair a copy receives.

use std::path::{Path, PathBuf};

use crate::error::{PkgcopyError, Result};
use crate::job::CopyJob;
use crate::resolve;

/// A resolved copy: exactly what will be read and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    /// Resolved source file
    pub source: PathBuf,
    /// Final destination path
    pub dest: PathBuf,
    /// Matches that lost the deterministic selection (sorted order, first wins)
    pub skipped: Vec<PathBuf>,
}

impl CopyPlan {
    /// Execute the plan: replace whatever is at the destination with the source
    pub fn execute(&self) -> Result<()> {
        copy_overwrite(&self.source, &self.dest)
    }
}

/// Build the copy plan for a job without touching the destination
pub fn plan(job: &CopyJob) -> Result<CopyPlan> {
    job.validate()?;

    // validate() guarantees a non-empty source pattern
    let spec = job.source_pkg.as_deref().unwrap_or_default();

    let (source, skipped) = resolve::resolve(spec)?;

    let dest = match job.pkg_path.as_deref().filter(|p| !p.is_empty()) {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let cache_dir =
                job.cache_dir
                    .as_ref()
                    .ok_or_else(|| PkgcopyError::JobInvalid {
                        message: "cache_dir is required when pkg_path is not set".to_string(),
                    })?;
            let name = source
                .file_name()
                .ok_or_else(|| PkgcopyError::JobInvalid {
                    message: format!(
                        "cannot derive a destination name from {}",
                        source.display()
                    ),
                })?;
            cache_dir.join(name)
        }
    };

    Ok(CopyPlan {
        source,
        dest,
        skipped,
    })
}

/// Run a job end to end
pub fn run(job: &CopyJob) -> Result<CopyPlan> {
    let plan = plan(job)?;
    plan.execute()?;
    Ok(plan)
}

/// Copy `source` to `dest`, replacing any file already there
///
/// The existing destination is unlinked first so read-only files and stale
/// permissions do not block the overwrite. The destination's parent
/// directory must already exist.
fn copy_overwrite(source: &Path, dest: &Path) -> Result<()> {
    if let Err(e) = std::fs::remove_file(dest) {
        if e.kind() != std::io::ErrorKind::NotFound {
            return Err(copy_error(source, dest, &e));
        }
    }

    std::fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| copy_error(source, dest, &e))
}

fn copy_error(source: &Path, dest: &Path, e: &std::io::Error) -> PkgcopyError {
    PkgcopyError::CopyFailed {
        src: source.display().to_string(),
        dest: dest.display().to_string(),
        reason: e.to_string(),
    }
}
