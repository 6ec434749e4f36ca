//! Whitespace rules for C source (`lang.c.whitespace.*`).
//!
//! Every rule here inspects a single line in isolation. Indentation rules
//! only look at the leading run of whitespace and never at code.

use stylecheck_core::{Registry, RegistryError, Rule};

/// Registers the `lang.c.whitespace.*` rules.
pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register("lang.c.whitespace.NoTabsRule", || Box::new(NoTabsRule))?;
    registry.register("lang.c.whitespace.IndentNoMixedWhitespace", || {
        Box::new(IndentNoMixedWhitespace)
    })?;
    registry.register("lang.c.whitespace.IndentSpacesOnly", || {
        Box::new(IndentSpacesOnly)
    })?;
    registry.register("lang.c.whitespace.IndentTabsOnly", || {
        Box::new(IndentTabsOnly)
    })?;
    registry.register("lang.c.whitespace.NoExtraWhitespace", || {
        Box::new(NoExtraWhitespace)
    })?;
    registry.register(
        "lang.c.whitespace.FunctionNoWhitespaceBeforeParenthesis",
        || Box::new(FunctionNoWhitespaceBeforeParenthesis),
    )?;
    Ok(())
}

/// The whitespace set these rules recognize: space, tab, line feed,
/// carriage return, vertical tab, form feed.
fn is_style_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Returns whether the line's indentation uses only the given whitespace
/// character.
///
/// Walks from the start of the line; any whitespace character other than
/// `target` fails, and scanning stops at the first non-whitespace
/// character. An empty or unindented line passes.
fn indent_is_only(line: &str, target: char) -> bool {
    for c in line.chars() {
        if !is_style_whitespace(c) {
            break;
        }
        if c != target {
            return false;
        }
    }
    true
}

/// Fails on any line containing a tab character.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTabsRule;

impl Rule for NoTabsRule {
    fn description(&self) -> &'static str {
        "Tab found; better to use spaces"
    }

    fn category(&self) -> &'static str {
        "whitespace/tab"
    }

    fn check(&self, line: &str) -> bool {
        !line.contains('\t')
    }
}

/// Fails when a line's leading whitespace mixes whitespace kinds.
///
/// Only the indentation is inspected: empty lines, lines starting with a
/// non-whitespace character, and whitespace-only lines pass trivially.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndentNoMixedWhitespace;

impl Rule for IndentNoMixedWhitespace {
    fn description(&self) -> &'static str {
        "Indentation should not mix whitespace characters"
    }

    fn category(&self) -> &'static str {
        "whitespace/indent"
    }

    fn check(&self, line: &str) -> bool {
        let Some(indent_char) = line.chars().next() else {
            return true;
        };
        if !is_style_whitespace(indent_char) {
            return true;
        }
        let Some(first_non_ws) = line.chars().find(|&c| !is_style_whitespace(c)) else {
            return true;
        };

        for c in line.chars() {
            if c == first_non_ws {
                return true;
            }
            if c != indent_char {
                return false;
            }
        }
        true
    }
}

/// Requires indentation to use spaces only.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndentSpacesOnly;

impl Rule for IndentSpacesOnly {
    fn description(&self) -> &'static str {
        "Indent with spaces"
    }

    fn category(&self) -> &'static str {
        "whitespace/indent"
    }

    fn check(&self, line: &str) -> bool {
        indent_is_only(line, ' ')
    }
}

/// Requires indentation to use tabs only.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndentTabsOnly;

impl Rule for IndentTabsOnly {
    fn description(&self) -> &'static str {
        "Indent with tabs"
    }

    fn category(&self) -> &'static str {
        "whitespace/indent"
    }

    fn check(&self, line: &str) -> bool {
        indent_is_only(line, '\t')
    }
}

/// Fails when a line's last character is whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtraWhitespace;

impl Rule for NoExtraWhitespace {
    fn description(&self) -> &'static str {
        "Extra whitespace"
    }

    fn category(&self) -> &'static str {
        "whitespace/extra"
    }

    fn check(&self, line: &str) -> bool {
        !line.chars().next_back().is_some_and(is_style_whitespace)
    }
}

/// Fails when whitespace separates a function name from its opening
/// parenthesis. Lines without a `(` pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct FunctionNoWhitespaceBeforeParenthesis;

impl Rule for FunctionNoWhitespaceBeforeParenthesis {
    fn description(&self) -> &'static str {
        "Whitespace between function and parenthesis"
    }

    fn category(&self) -> &'static str {
        "whitespace/function"
    }

    fn check(&self, line: &str) -> bool {
        match line.split_once('(') {
            Some((before, _)) => !before.chars().next_back().is_some_and(is_style_whitespace),
            None => true,
        }
    }
}
