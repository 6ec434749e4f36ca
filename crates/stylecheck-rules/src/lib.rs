//! # stylecheck-rules
//!
//! Built-in line rules for stylecheck, organized by language namespace.
//!
//! Each rule registers under a fully-qualified identifier whose module
//! path mirrors the crate's module tree, e.g. the rules in [`c::whitespace`]
//! live under `lang.c.whitespace.*`.
//!
//! ## Available rules
//!
//! | Identifier | Category | Description |
//! |------------|----------|-------------|
//! | `lang.c.whitespace.NoTabsRule` | `whitespace/tab` | Tab found; better to use spaces |
//! | `lang.c.whitespace.IndentNoMixedWhitespace` | `whitespace/indent` | Indentation should not mix whitespace characters |
//! | `lang.c.whitespace.IndentSpacesOnly` | `whitespace/indent` | Indent with spaces |
//! | `lang.c.whitespace.IndentTabsOnly` | `whitespace/indent` | Indent with tabs |
//! | `lang.c.whitespace.NoExtraWhitespace` | `whitespace/extra` | Extra whitespace |
//! | `lang.c.whitespace.FunctionNoWhitespaceBeforeParenthesis` | `whitespace/function` | Whitespace between function and parenthesis |
//!
//! ## Usage
//!
//! ```ignore
//! use stylecheck_core::Spec;
//! use stylecheck_rules::builtin_registry;
//!
//! let registry = builtin_registry()?;
//! let resolution = Spec::resolve("lang.c.whitespace.NoTabsRule", &registry)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod c;

use stylecheck_core::{Registry, RegistryError};

/// Builds a registry holding every built-in rule.
///
/// # Errors
///
/// Returns an error if any built-in rule fails validation; this is a
/// configuration error and fatal at startup.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    c::register(&mut registry)?;
    Ok(registry)
}

/// Re-export core types for convenience.
pub use stylecheck_core::{Rule, RuleBox};
