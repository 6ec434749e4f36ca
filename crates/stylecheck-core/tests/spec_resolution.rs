//! Integration tests for spec-file resolution against on-disk fixtures.

use std::fs;
use std::path::Path;

use stylecheck_core::{Registry, Rule, Spec};

struct AlwaysPasses;

impl Rule for AlwaysPasses {
    fn description(&self) -> &'static str {
        "Never reported"
    }
    fn check(&self, _line: &str) -> bool {
        true
    }
}

fn test_registry() -> Registry {
    let mut registry = Registry::new();
    for id in [
        "lang.c.whitespace.NoTabsRule",
        "lang.c.whitespace.IndentTabsOnly",
        "lang.c.whitespace.NoExtraWhitespace",
    ] {
        registry.register(id, || Box::new(AlwaysPasses)).unwrap();
    }
    registry
}

fn resolve_file(path: &Path, registry: &Registry) -> Vec<String> {
    let resolution = Spec::resolve(path.to_str().unwrap(), registry).unwrap();
    resolution
        .spec
        .identifiers()
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn expands_nested_spec_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("base.spec"),
        "lang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("full.spec"),
        "base.spec\nlang.c.whitespace.NoExtraWhitespace\n",
    )
    .unwrap();

    let ids = resolve_file(&dir.path().join("full.spec"), &test_registry());
    assert_eq!(
        ids,
        vec![
            "lang.c.whitespace.NoExtraWhitespace",
            "lang.c.whitespace.NoTabsRule",
        ]
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rules.spec"),
        "# whitespace rules\n\n   \nlang.c.whitespace.NoTabsRule\n# lang.c.whitespace.NoExtraWhitespace\n",
    )
    .unwrap();

    let ids = resolve_file(&dir.path().join("rules.spec"), &test_registry());
    assert_eq!(ids, vec!["lang.c.whitespace.NoTabsRule"]);
}

#[test]
fn file_references_do_not_remain_as_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("base.spec"),
        "lang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();
    fs::write(dir.path().join("top.spec"), "base.spec\n").unwrap();

    let registry = test_registry();
    let resolution =
        Spec::resolve(dir.path().join("top.spec").to_str().unwrap(), &registry).unwrap();
    assert_eq!(
        resolution.spec.identifiers(),
        vec!["lang.c.whitespace.NoTabsRule"]
    );
    // "base.spec" must not surface as an unresolvable identifier.
    assert!(resolution.unresolved.is_empty());
}

#[test]
fn self_referencing_spec_file_terminates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("loop.spec"),
        "loop.spec\nlang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();

    let ids = resolve_file(&dir.path().join("loop.spec"), &test_registry());
    assert_eq!(ids, vec!["lang.c.whitespace.NoTabsRule"]);
}

#[test]
fn mutually_referencing_spec_files_terminate() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.spec"),
        "b.spec\nlang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("b.spec"),
        "a.spec\nlang.c.whitespace.IndentTabsOnly\n",
    )
    .unwrap();

    let ids = resolve_file(&dir.path().join("a.spec"), &test_registry());
    assert_eq!(
        ids,
        vec![
            "lang.c.whitespace.IndentTabsOnly",
            "lang.c.whitespace.NoTabsRule",
        ]
    );
}

#[test]
fn resolution_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("base.spec"),
        "lang.c.whitespace.IndentTabsOnly\nlang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("top.spec"),
        "base.spec\nlang.c.whitespace.NoTabsRule\n",
    )
    .unwrap();

    let registry = test_registry();
    let first = resolve_file(&dir.path().join("top.spec"), &registry);
    let second = resolve_file(&dir.path().join("top.spec"), &registry);
    assert_eq!(first, second);
    // Deduplicated: NoTabsRule appears once despite being listed twice.
    assert_eq!(first.iter().filter(|id| id.contains("NoTabsRule")).count(), 1);
}

#[test]
fn missing_spec_file_path_resolves_as_identifier() {
    // A lone selection that names no existing file falls back to
    // identifier resolution and comes back unresolved, not as an error.
    let registry = test_registry();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.spec");
    let resolution = Spec::resolve(missing.to_str().unwrap(), &registry).unwrap();
    assert!(resolution.spec.is_empty());
    assert_eq!(resolution.unresolved.len(), 1);
}
