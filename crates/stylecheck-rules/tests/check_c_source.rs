//! End-to-end checks of the built-in C rules through spec resolution.

use stylecheck_core::{Checker, Spec};
use stylecheck_rules::builtin_registry;

#[test]
fn tab_in_body_is_the_only_diagnostic() {
    let registry = builtin_registry().unwrap();
    let resolution = Spec::resolve(
        "lang.c.whitespace.NoTabsRule,lang.c.whitespace.IndentNoMixedWhitespace",
        &registry,
    )
    .unwrap();
    assert_eq!(resolution.spec.len(), 2);
    let checker = Checker::new(resolution.spec);

    let source = "#include <stdio.h>\n\n int main() {\n\tprintf(\"x\");\n}";
    let mut diagnostics = Vec::new();
    for (i, line) in source.split('\n').enumerate() {
        diagnostics.extend(checker.check_line("hello.c", i + 1, line));
    }

    // Exactly one violation: the tab on the printf line. The
    // space-indented "int main" line is not mixed indentation.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 4);
    assert_eq!(diagnostics[0].message, "Tab found; better to use spaces");
    assert_eq!(diagnostics[0].category, "whitespace/tab");
    assert_eq!(
        diagnostics[0].to_string(),
        "hello.c:4:  Tab found; better to use spaces  [whitespace/tab]"
    );
}

#[test]
fn unresolvable_rule_leaves_the_rest_of_the_spec_intact() {
    let registry = builtin_registry().unwrap();
    let resolution = Spec::resolve(
        "lang.c.whitespace.DoesNotExist,lang.c.whitespace.NoTabsRule",
        &registry,
    )
    .unwrap();

    assert_eq!(
        resolution.unresolved,
        vec!["lang.c.whitespace.DoesNotExist"]
    );
    assert_eq!(
        resolution.spec.identifiers(),
        vec!["lang.c.whitespace.NoTabsRule"]
    );
}

#[test]
fn one_line_can_produce_multiple_diagnostics() {
    let registry = builtin_registry().unwrap();
    let resolution = Spec::resolve(
        "lang.c.whitespace.NoTabsRule,lang.c.whitespace.NoExtraWhitespace",
        &registry,
    )
    .unwrap();
    let checker = Checker::new(resolution.spec);

    let diagnostics = checker.check_line("a.c", 1, "\tint x;\t");
    let categories: Vec<&str> = diagnostics.iter().map(|d| d.category.as_str()).collect();
    // Spec order is alphabetical by identifier.
    assert_eq!(categories, vec!["whitespace/extra", "whitespace/tab"]);
}
