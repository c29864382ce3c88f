//! Orchestration of one exercise generation.
//!
//! Combines the existence checks, the renderer and the path remapper into
//! the flow behind `exgen new`. Generation is not atomic: a failure after
//! rendering has started leaves a partial destination behind, and two
//! concurrent invocations for the same slug are not coordinated.

use crate::config::Layout;
use crate::error::{Error, Result};
use crate::registry::Record;
use crate::renderer::{build_tokens, render_tree};
use crate::remap::relocate_package_dirs;
use crate::slug::{suggest_collision_free, to_package_segment};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Fallback Gradle build file written when the template provides none.
const FALLBACK_BUILD_FILE: &str = r#"plugins { id("java") }

dependencies {
  implementation(project(":common"))
  testImplementation(platform("org.junit:junit-bom:5.10.2"))
  testImplementation("org.junit.jupiter:junit-jupiter")
}

tasks.test { useJUnitPlatform() }
"#;

/// Generates the exercise `slug` from `template`, driven by `record`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the generated exercise directory
///
/// # Errors
/// * `Error::DestinationExists` if the slug's directory already exists; the
///   error carries a collision-free alternative and nothing is written
/// * `Error::TemplateNotFound` if the template tree is missing
/// * `Error::IoError` for filesystem failures during rendering
pub fn create_exercise(
    layout: &Layout,
    slug: &str,
    record: &Record,
    template: &str,
) -> Result<PathBuf> {
    let dest = layout.exercise_dir(slug);
    if dest.exists() {
        return Err(Error::DestinationExists {
            slug: slug.to_string(),
            dest: dest.display().to_string(),
            suggestion: suggest_collision_free(slug, &layout.exercises),
        });
    }

    let template_dir = layout.template_dir(template);
    if !template_dir.exists() {
        return Err(Error::TemplateNotFound {
            template: template.to_string(),
            templates_dir: layout.templates.display().to_string(),
        });
    }

    let segment = to_package_segment(slug);
    let tokens = build_tokens(record, slug);
    debug!("rendering template '{}' into {}", template, dest.display());

    render_tree(&template_dir, &dest, &tokens, &segment)?;
    relocate_package_dirs(&dest, &segment)?;

    // Every exercise must be buildable even from a bare template.
    let build_file = dest.join("build.gradle.kts");
    if !build_file.exists() {
        fs::write(&build_file, FALLBACK_BUILD_FILE).map_err(Error::IoError)?;
    }

    Ok(dest)
}
