//! Rule trait for defining line-oriented style rules.

/// A single-line style rule.
///
/// Implement this trait to create rules that inspect one line of text in
/// isolation. Rules are stateless: `check` must be a pure function of the
/// line, with no dependence on line position or previously seen lines, so
/// one instance is safe to reuse across lines and files.
///
/// # Example
///
/// ```ignore
/// use stylecheck_core::Rule;
///
/// struct NoTrailingSemicolon;
///
/// impl Rule for NoTrailingSemicolon {
///     fn description(&self) -> &'static str {
///         "Line ends with a stray semicolon"
///     }
///
///     fn check(&self, line: &str) -> bool {
///         !line.ends_with(";;")
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the one-line human-readable message for a violation.
    ///
    /// Must be non-empty; the [`Registry`](crate::Registry) rejects rules
    /// with an empty description at registration time.
    fn description(&self) -> &'static str;

    /// Returns the slash-delimited category tag (e.g. `whitespace/tab`),
    /// or an empty string for uncategorized rules.
    fn category(&self) -> &'static str {
        ""
    }

    /// Checks a single line of text.
    ///
    /// Returns `true` when the line passes (no violation) and `false` when
    /// it violates the rule. Must be total over any string: empty lines,
    /// lines with no alphabetic content, and lines of any length.
    fn check(&self, line: &str) -> bool;
}

/// Type alias for boxed [`Rule`] trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn description(&self) -> &'static str {
            "Line contains the word frobnicate"
        }

        fn category(&self) -> &'static str {
            "naming/jargon"
        }

        fn check(&self, line: &str) -> bool {
            !line.contains("frobnicate")
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.description(), "Line contains the word frobnicate");
        assert_eq!(rule.category(), "naming/jargon");
        assert!(rule.check("let x = 1;"));
        assert!(!rule.check("frobnicate the bits"));
    }

    #[test]
    fn test_default_category_is_empty() {
        struct Uncategorized;
        impl Rule for Uncategorized {
            fn description(&self) -> &'static str {
                "something"
            }
            fn check(&self, _line: &str) -> bool {
                true
            }
        }
        assert_eq!(Uncategorized.category(), "");
    }
}
