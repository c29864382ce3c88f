//! Slug normalization and collision handling.

use regex::Regex;
use std::path::Path;

/// Derives the package-name segment for a slug.
///
/// Strips every character that is not an ASCII letter or digit, prefixes a
/// filler `x` when the result is empty or does not start with a letter, and
/// lowercases the whole result. The segment completes both the package
/// sentinel replacement and the relocation target directory name.
pub fn to_package_segment(slug: &str) -> String {
    let mut segment: String = slug.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if !segment.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        segment.insert(0, 'x');
    }
    segment.to_lowercase()
}

/// Proposes a sibling slug that does not exist under `exercises_root`.
///
/// A slug already carrying a `-v<N>` suffix continues counting from `N + 1`
/// against the same base; anything else starts at `<slug>-v2`. The first
/// candidate with no directory at the destination wins. Pure with respect to
/// the filesystem: only existence checks, no writes.
pub fn suggest_collision_free<P: AsRef<Path>>(slug: &str, exercises_root: P) -> String {
    let exercises_root = exercises_root.as_ref();
    let version_suffix = Regex::new(r"^(.*?)-v(\d+)$").expect("valid version-suffix pattern");

    let (base, start) = match version_suffix.captures(slug) {
        Some(caps) => {
            let base = caps.get(1).map(|m| m.as_str()).unwrap_or(slug).to_string();
            // A suffix too large for u64 is treated as an ordinary slug.
            match caps[2].parse::<u64>() {
                Ok(n) => (base, n + 1),
                Err(_) => (slug.to_string(), 2),
            }
        }
        None => (slug.to_string(), 2),
    };

    let mut k = start;
    loop {
        let candidate = format!("{base}-v{k}");
        if !exercises_root.join(&candidate).exists() {
            return candidate;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_strips_and_prefixes() {
        assert_eq!(to_package_segment("strategy-pattern"), "strategypattern");
        assert_eq!(to_package_segment("123-abc!"), "x123abc");
        assert_eq!(to_package_segment(""), "x");
        assert_eq!(to_package_segment("Observer-V2"), "observerv2");
    }
}
