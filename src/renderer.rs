//! Template tree rendering.
//!
//! Rendering is literal text substitution: every `${NAME}` placeholder in a
//! recognized text file is replaced by its token value, and the package
//! sentinel is rewritten to the slug's namespace. There is no expansion of
//! substituted values and no escaping; files outside the text allow-list are
//! copied byte-for-byte.

use crate::constants::{DEFAULT_CHECKLIST, PKG_NAMESPACE, PKG_SENTINEL, TEXT_EXTENSIONS};
use crate::error::{Error, Result};
use crate::registry::Record;
use cruet::Inflector;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Ordered token-name to replacement-text mapping.
pub type TokenMap = IndexMap<String, String>;

/// Renders checklist entries as markdown bullet lines.
pub fn render_checklist_bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n")
}

/// Derives the substitution tokens for a record.
///
/// Fallbacks when a field is absent or blank: `TITLE` title-cases the slug,
/// `PROMPT` and `TAGS` become empty, `DIFFICULTY` becomes `unknown`, and
/// `CHECKLIST` becomes a single default bullet.
pub fn build_tokens(record: &Record, slug: &str) -> TokenMap {
    let title = match record.scalar("title").map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => slug.to_title_case(),
    };

    let prompt = record.scalar("prompt").map(str::trim).unwrap_or_default().to_string();

    let tags = record.list("tags").map(|tags| tags.join(", ")).unwrap_or_default();

    let difficulty = match record.scalar("difficulty").map(str::trim) {
        Some(difficulty) if !difficulty.is_empty() => difficulty.to_string(),
        _ => "unknown".to_string(),
    };

    let checklist = match record.list("checklist") {
        Some(items) if !items.is_empty() => render_checklist_bullets(items),
        _ => DEFAULT_CHECKLIST.to_string(),
    };

    IndexMap::from([
        ("TITLE".to_string(), title),
        ("PROMPT".to_string(), prompt),
        ("TAGS".to_string(), tags),
        ("DIFFICULTY".to_string(), difficulty),
        ("CHECKLIST".to_string(), checklist),
    ])
}

/// Replaces every `${NAME}` occurrence with its token value.
pub fn replace_tokens(content: &str, tokens: &TokenMap) -> String {
    let mut content = content.to_string();
    for (name, value) in tokens {
        content = content.replace(&format!("${{{name}}}"), value);
    }
    content
}

/// Rewrites the package sentinel to the exercise namespace for `segment`.
pub fn replace_sentinel(content: &str, segment: &str) -> String {
    content.replace(PKG_SENTINEL, &format!("{PKG_NAMESPACE}.{segment}"))
}

/// Whether a path's extension is on the text allow-list.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Copies the template tree to `dest`, substituting tokens and the package
/// sentinel in recognized text files.
///
/// Text files that fail UTF-8 decoding fall back to a byte-for-byte copy
/// instead of failing the run. The caller is responsible for the
/// destination-exists precondition; this function creates `dest` and every
/// intermediate directory it needs.
///
/// # Errors
/// * `Error::IoError` on any filesystem read or write failure
pub fn render_tree<P: AsRef<Path>>(
    template_dir: P,
    dest: P,
    tokens: &TokenMap,
    segment: &str,
) -> Result<()> {
    let template_dir = template_dir.as_ref();
    let dest = dest.as_ref();

    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .expect("walked path is under the template root");
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(Error::IoError)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        if is_text_file(entry.path()) {
            let bytes = fs::read(entry.path()).map_err(Error::IoError)?;
            match String::from_utf8(bytes) {
                Ok(content) => {
                    debug!("substituting: {}", relative.display());
                    let content = replace_tokens(&content, tokens);
                    let content = replace_sentinel(&content, segment);
                    fs::write(&target, content).map_err(Error::IoError)?;
                }
                Err(undecodable) => {
                    // Matched by extension but not valid text; leave untouched.
                    debug!("copying undecodable file: {}", relative.display());
                    fs::write(&target, undecodable.into_bytes()).map_err(Error::IoError)?;
                }
            }
        } else {
            debug!("copying: {}", relative.display());
            fs::copy(entry.path(), &target).map(|_| ()).map_err(Error::IoError)?;
        }
    }

    Ok(())
}
