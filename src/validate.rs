//! Repository structure validation and optional build execution.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Paths, relative to the repository root, that every practice repository
/// must carry.
pub const REQUIRED_PATHS: [&str; 8] = [
    "settings.gradle.kts",
    "build.gradle.kts",
    "gradle.properties",
    ".editorconfig",
    "registry/questions.yaml",
    "templates/exercise-java/build.gradle.kts",
    "common/src/main/java/com/learn/ood/common/ConsoleIO.java",
    "common/src/test/java/com/learn/ood/common/CommonSmokeTest.java",
];

/// Checks that every required file exists under `root`.
///
/// # Errors
/// * `Error::ValidationError` listing each missing path
pub fn validate_structure<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    let missing: Vec<String> = REQUIRED_PATHS
        .iter()
        .map(|relative| root.join(relative))
        .filter(|path| !path.exists())
        .map(|path| format!(" - {}", path.display()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationError(missing.join("\n")))
    }
}

/// Searches PATH for an executable named `name`.
fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Locates the Gradle executable: a `gradlew` wrapper at the repository root
/// wins over a `gradle` on PATH.
pub fn find_gradle<P: AsRef<Path>>(root: P) -> Option<PathBuf> {
    let wrapper = root.as_ref().join("gradlew");
    if wrapper.is_file() {
        return Some(wrapper);
    }
    find_on_path("gradle")
}

/// Runs `gradle test` (or the wrapper) from the repository root.
///
/// # Errors
/// * `Error::BuildError` when no Gradle executable is found or the build
///   exits with a non-zero status
pub fn run_build<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    let gradle = find_gradle(root).ok_or_else(|| {
        Error::BuildError(
            "Gradle not found on PATH. Install Gradle or add a wrapper to run builds"
                .to_string(),
        )
    })?;

    let status = Command::new(&gradle)
        .arg("test")
        .current_dir(root)
        .status()
        .map_err(Error::IoError)?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::BuildError(format!("Gradle build failed with status: {status}")))
    }
}
