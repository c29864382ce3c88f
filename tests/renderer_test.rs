use exgen::registry::{parse_document, Strictness};
use exgen::renderer::{
    build_tokens, is_text_file, render_checklist_bullets, render_tree, replace_sentinel,
    replace_tokens,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_title_falls_back_to_title_cased_slug() {
    let document = parse_document("- slug: strategy-pattern\n", Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "strategy-pattern");
    assert_eq!(tokens["TITLE"], "Strategy Pattern");
}

#[test]
fn test_token_defaults() {
    let document = parse_document("- slug: a\n", Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "a");
    assert_eq!(tokens["PROMPT"], "");
    assert_eq!(tokens["TAGS"], "");
    assert_eq!(tokens["DIFFICULTY"], "unknown");
    assert_eq!(tokens["CHECKLIST"], "- [ ] Define your plan");
}

#[test]
fn test_tokens_from_populated_record() {
    let input = "- slug: a\n  title: Observer Push\n  tags: one, two\n  difficulty: hard\n  checklist:\n    - first\n    - second\n";
    let document = parse_document(input, Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "a");
    assert_eq!(tokens["TITLE"], "Observer Push");
    assert_eq!(tokens["TAGS"], "one, two");
    assert_eq!(tokens["DIFFICULTY"], "hard");
    assert_eq!(tokens["CHECKLIST"], "- first\n- second");
}

#[test]
fn test_render_checklist_bullets() {
    let items = vec!["plan".to_string(), "code".to_string()];
    assert_eq!(render_checklist_bullets(&items), "- plan\n- code");
}

#[test]
fn test_replace_tokens_is_literal() {
    let document = parse_document("- slug: a\n  title: My Title\n", Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "a");
    let out = replace_tokens("# ${TITLE}\n${UNKNOWN} stays", &tokens);
    assert_eq!(out, "# My Title\n${UNKNOWN} stays");
}

#[test]
fn test_replace_sentinel() {
    let out = replace_sentinel("package com.learn.ood.EXERCISE_PKG;", "strategypattern");
    assert_eq!(out, "package com.learn.ood.exercises.strategypattern;");
}

#[test]
fn test_is_text_file() {
    assert!(is_text_file(Path::new("README.md")));
    assert!(is_text_file(Path::new("App.java")));
    assert!(is_text_file(Path::new("build.gradle")));
    assert!(is_text_file(Path::new("Main.KT")));
    assert!(!is_text_file(Path::new("logo.png")));
    assert!(!is_text_file(Path::new("Makefile")));
}

#[test]
fn test_render_tree_substitutes_and_copies() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir_all(template.join("docs")).unwrap();
    fs::write(template.join("README.md"), "# ${TITLE}\n\n${PROMPT}\n").unwrap();
    fs::write(template.join("docs/logo.png"), [0x89u8, 0x50, 0x4e, 0x47]).unwrap();

    let document =
        parse_document("- slug: a\n  title: T\n  prompt: P\n", Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "a");

    let dest = temp_dir.path().join("out");
    render_tree(&template, &dest, &tokens, "a").unwrap();

    assert_eq!(fs::read_to_string(dest.join("README.md")).unwrap(), "# T\n\nP\n");
    assert_eq!(fs::read(dest.join("docs/logo.png")).unwrap(), [0x89u8, 0x50, 0x4e, 0x47]);
}

#[test]
fn test_render_tree_passes_through_undecodable_text_file() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir_all(&template).unwrap();
    // .txt is on the allow-list but this content is not valid UTF-8.
    let raw = [0xffu8, 0xfe, b'$', b'{', b'T', b'I', b'T', b'L', b'E', b'}'];
    fs::write(template.join("notes.txt"), raw).unwrap();

    let document = parse_document("- slug: a\n", Strictness::Lenient).unwrap();
    let tokens = build_tokens(&document.records[0], "a");

    let dest = temp_dir.path().join("out");
    render_tree(&template, &dest, &tokens, "a").unwrap();

    assert_eq!(fs::read(dest.join("notes.txt")).unwrap(), raw);
}
