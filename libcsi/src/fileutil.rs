//! Enumeration of files materialized under a mount target.
//!
//! [`get_mounted_files`] walks a directory tree and indexes every regular file
//! by its path relative to the root, joined with `/` on every platform so the
//! keys are stable for callers comparing them against object names.
//!
//! Enumeration is all-or-nothing: the first error on any entry aborts the walk
//! and no partial index is returned.

use std::path::{Component, Path, PathBuf};

use tracing::{Span, debug, instrument, warn};
use walkdir::WalkDir;

use crate::config::{WALK_CONFIG, WalkConfig};
use crate::error::CsiError;
use crate::types::{MountedFile, MountedFileIndex};

/// Index every regular file under `root`, using the process-wide
/// [`WALK_CONFIG`].
///
/// An existing directory with no files yields an empty index, not an error.
pub fn get_mounted_files(root: impl AsRef<Path>) -> Result<MountedFileIndex, CsiError> {
    get_mounted_files_with(root, &WALK_CONFIG)
}

/// Same as [`get_mounted_files`] with explicit walk options.
pub fn get_mounted_files_with(
    root: impl AsRef<Path>,
    config: &WalkConfig,
) -> Result<MountedFileIndex, CsiError> {
    walk(root.as_ref(), config)
}

/// Run [`get_mounted_files`] on Tokio's blocking pool.
///
/// Must be called from within a Tokio runtime.
#[instrument(level = "debug", skip_all)]
pub async fn get_mounted_files_async(
    root: impl Into<PathBuf>,
) -> Result<MountedFileIndex, CsiError> {
    let root = root.into();
    let span = Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(|| get_mounted_files(root)))
        .await
        .map_err(CsiError::internal)?
}

#[instrument(level = "debug", skip_all, fields(root = %root.display()))]
fn walk(root: &Path, config: &WalkConfig) -> Result<MountedFileIndex, CsiError> {
    let mut walker = WalkDir::new(root).follow_links(config.follow_links);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let walk_err = |source: walkdir::Error| {
        warn!(error = %source, "mounted file enumeration aborted");
        CsiError::Walk {
            path: root.to_path_buf(),
            source,
        }
    };

    let mut files = MountedFileIndex::new();
    for entry in walker {
        let entry = entry.map_err(walk_err)?;

        // The root is always followed, even when it is a symlink.
        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(CsiError::NotADirectory(root.to_path_buf()));
            }
            continue;
        }
        // Directories are only traversed. Unfollowed symlinks are skipped.
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(root).map_err(CsiError::internal)?;
        let key =
            to_slash(rel).ok_or_else(|| CsiError::NonUtf8Path(entry.path().to_path_buf()))?;
        let metadata = entry.metadata().map_err(walk_err)?;

        files.insert(
            key,
            MountedFile {
                path: entry.path().to_path_buf(),
                size: metadata.len(),
                modified: metadata.modified().ok(),
            },
        );
    }

    debug!(count = files.len(), "enumerated mounted files");
    Ok(files)
}

/// Join the normal components of a relative path with `/`.
///
/// Returns `None` if any component is not valid UTF-8.
pub fn to_slash(rel: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
