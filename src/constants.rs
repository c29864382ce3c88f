//! Common constants used throughout the exgen application.

/// Registry file location relative to the repository root
pub const REGISTRY_FILE: &str = "registry/questions.yaml";

/// Template directory location relative to the repository root
pub const TEMPLATES_DIR: &str = "templates";

/// Exercise output location relative to the repository root
pub const EXERCISES_DIR: &str = "exercises";

/// Template used when `--template` is not given
pub const DEFAULT_TEMPLATE: &str = "exercise-java";

/// Extensions of files that receive token substitution; everything else is
/// copied byte-for-byte
pub const TEXT_EXTENSIONS: [&str; 6] = ["md", "java", "kt", "kts", "gradle", "txt"];

/// Package placeholder replaced during rendering
pub const PKG_SENTINEL: &str = "com.learn.ood.EXERCISE_PKG";

/// Namespace the sentinel resolves into, completed with a slug-derived segment
pub const PKG_NAMESPACE: &str = "com.learn.ood.exercises";

/// Placeholder directory name relocated by the path remapper
pub const PLACEHOLDER_DIR: &str = "EXERCISE_PKG";

/// Directory components of the base namespace the placeholder lives under
pub const BASE_NAMESPACE: [&str; 3] = ["com", "learn", "ood"];

/// Checklist rendered when a record has none
pub const DEFAULT_CHECKLIST: &str = "- [ ] Define your plan";
