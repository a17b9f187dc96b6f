//! Source pattern resolution
//!
//! Expands a job's `source_pkg` specifier against the filesystem. A literal
//! path resolves to itself when it exists; a glob pattern is walked from its
//! invariant prefix. Matches come back in sorted order so selection stays
//! deterministic across platforms and filesystems.

use std::path::{Path, PathBuf};

use wax::Glob;

use crate::error::{PkgcopyError, Result};

/// Characters that make a specifier a glob pattern rather than a literal path
const GLOB_META_CHARS: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Whether a source specifier contains glob syntax
pub fn is_pattern(spec: &str) -> bool {
    spec.contains(GLOB_META_CHARS)
}

/// Expand a source specifier to all matching paths, sorted lexicographically
///
/// A literal specifier yields itself iff it exists, mirroring how a glob
/// library treats a pattern without wildcards. `*` and `?` do not cross
/// path separators; `**` matches recursively.
pub fn matches(spec: &str) -> Result<Vec<PathBuf>> {
    if !is_pattern(spec) {
        let path = PathBuf::from(spec);
        if path.exists() {
            return Ok(vec![path]);
        }
        return Ok(Vec::new());
    }

    let glob = Glob::new(spec).map_err(|e| PkgcopyError::InvalidPattern {
        pattern: spec.to_string(),
        reason: e.to_string(),
    })?;

    // Split off the literal leading directories so only the variant tail
    // is matched during the walk.
    let (prefix, glob) = glob.partition();
    let in_cwd = prefix.as_os_str().is_empty();
    let root = if in_cwd { PathBuf::from(".") } else { prefix };

    let mut found: Vec<PathBuf> = glob
        .walk(root)
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .map(|path| {
            if in_cwd {
                // Walking "." yields "./name"; report paths the way the
                // pattern was written.
                path.strip_prefix(".")
                    .map(Path::to_path_buf)
                    .unwrap_or(path)
            } else {
                path
            }
        })
        .collect();
    found.sort();

    Ok(found)
}

/// Resolve a source specifier to exactly one path
///
/// Zero matches is an error. With several matches the first in sorted order
/// wins; the rest are returned so the caller can warn about them.
pub fn resolve(spec: &str) -> Result<(PathBuf, Vec<PathBuf>)> {
    let mut found = matches(spec)?;
    if found.is_empty() {
        return Err(PkgcopyError::SourceNotFound {
            pattern: spec.to_string(),
        });
    }
    let chosen = found.remove(0);
    Ok((chosen, found))
}
