//! Package directory relocation.
//!
//! Templates keep their sources under one fixed placeholder package so a
//! single template can serve every exercise. After rendering, each
//! `src/<variant>/<language>/com/learn/ood/EXERCISE_PKG` directory is moved
//! to a sibling `exercises/<segment>` path carrying the slug's package
//! segment.

use crate::constants::{BASE_NAMESPACE, EXERCISES_DIR, PLACEHOLDER_DIR};
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether `path` is a placeholder package directory under a source root,
/// i.e. its components end `src/<variant>/<language>/com/learn/ood/EXERCISE_PKG`.
fn is_placeholder_package(path: &Path) -> bool {
    let components: Vec<&str> =
        path.components().filter_map(|c| c.as_os_str().to_str()).collect();
    let n = components.len();
    if n < BASE_NAMESPACE.len() + 4 {
        return false;
    }
    components[n - 1] == PLACEHOLDER_DIR
        && components[n - 4..n - 1] == BASE_NAMESPACE
        && components[n - 7] == "src"
}

/// Collects every placeholder package directory under `base`.
fn find_placeholder_dirs(base: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(base) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_dir() && is_placeholder_package(entry.path()) {
            found.push(entry.path().to_path_buf());
        }
    }
    Ok(found)
}

/// Moves every descendant file of `source` to the same relative path under
/// `target`, creating directories as needed.
fn move_contents(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walked path is under the placeholder root");
        let dest = target.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        fs::rename(entry.path(), &dest).map_err(Error::IoError)?;
    }
    Ok(())
}

/// Relocates placeholder package directories beneath `base` to
/// `exercises/<segment>`.
///
/// The move itself is mandatory; removing the emptied placeholder directory
/// afterwards is best-effort and a failure there never fails generation.
pub fn relocate_package_dirs<P: AsRef<Path>>(base: P, segment: &str) -> Result<()> {
    let base = base.as_ref();

    // Collect first: renaming while walking would invalidate the traversal.
    for placeholder in find_placeholder_dirs(base)? {
        let parent = placeholder
            .parent()
            .expect("placeholder package has a namespace parent");
        let target = parent.join(EXERCISES_DIR).join(segment);
        debug!(
            "relocating package: {} -> {}",
            placeholder.display(),
            target.display()
        );
        fs::create_dir_all(&target).map_err(Error::IoError)?;
        move_contents(&placeholder, &target)?;
        if let Err(e) = fs::remove_dir_all(&placeholder) {
            warn!("could not remove placeholder {}: {}", placeholder.display(), e);
        }
    }
    Ok(())
}
