//! Repository layout resolution.
//!
//! All commands operate relative to a practice-repository root containing a
//! question registry, a template directory and an exercise output directory.

use crate::constants::{EXERCISES_DIR, REGISTRY_FILE, TEMPLATES_DIR};
use std::path::{Path, PathBuf};

/// Resolved locations of the repository's moving parts.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Repository root
    pub root: PathBuf,
    /// Question registry file (`registry/questions.yaml`)
    pub registry: PathBuf,
    /// Template trees (`templates/<name>`)
    pub templates: PathBuf,
    /// Generated exercises (`exercises/<slug>`)
    pub exercises: PathBuf,
}

impl Layout {
    /// Builds the layout from a repository root.
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            registry: root.join(REGISTRY_FILE),
            templates: root.join(TEMPLATES_DIR),
            exercises: root.join(EXERCISES_DIR),
            root,
        }
    }

    /// Path of the template tree named `template`.
    pub fn template_dir(&self, template: &str) -> PathBuf {
        self.templates.join(template)
    }

    /// Destination path of the exercise named `slug`.
    pub fn exercise_dir(&self, slug: &str) -> PathBuf {
        self.exercises.join(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_under_root() {
        let layout = Layout::from_root("/repo");
        assert_eq!(layout.registry, PathBuf::from("/repo/registry/questions.yaml"));
        assert_eq!(layout.template_dir("exercise-java"), PathBuf::from("/repo/templates/exercise-java"));
        assert_eq!(layout.exercise_dir("foo"), PathBuf::from("/repo/exercises/foo"));
    }
}
