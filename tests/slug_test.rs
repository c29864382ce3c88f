use exgen::slug::{suggest_collision_free, to_package_segment};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_segment_strips_non_alphanumerics() {
    assert_eq!(to_package_segment("strategy-pattern"), "strategypattern");
    assert_eq!(to_package_segment("builder_v2"), "builderv2");
}

#[test]
fn test_segment_prefixes_filler_letter() {
    assert_eq!(to_package_segment("123-abc!"), "x123abc");
    assert_eq!(to_package_segment("42"), "x42");
    assert_eq!(to_package_segment(""), "x");
}

#[test]
fn test_segment_lowercases() {
    assert_eq!(to_package_segment("Visitor-Pattern"), "visitorpattern");
}

#[test]
fn test_suggestion_starts_at_v2() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("foo")).unwrap();

    assert_eq!(suggest_collision_free("foo", temp_dir.path()), "foo-v2");
}

#[test]
fn test_suggestion_skips_taken_versions() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("foo")).unwrap();
    fs::create_dir(temp_dir.path().join("foo-v2")).unwrap();

    assert_eq!(suggest_collision_free("foo", temp_dir.path()), "foo-v3");
}

#[test]
fn test_suggestion_continues_from_versioned_slug() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("foo-v3")).unwrap();

    assert_eq!(suggest_collision_free("foo-v3", temp_dir.path()), "foo-v4");
}

#[test]
fn test_suggestion_is_pure() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("foo")).unwrap();

    let first = suggest_collision_free("foo", temp_dir.path());
    let second = suggest_collision_free("foo", temp_dir.path());
    assert_eq!(first, second);
    assert!(!temp_dir.path().join(first).exists());
}
