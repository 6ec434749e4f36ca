//! # stylecheck-core
//!
//! Core framework for line-oriented style checking.
//!
//! This crate provides the foundational traits and types for building
//! line-based style checkers. It includes:
//!
//! - [`Rule`] trait for single-line style rules
//! - [`Registry`] mapping rule identifiers to constructors
//! - [`Spec`] resolution from identifier lists or spec files
//! - [`Checker`] for driving a resolved spec across input lines
//! - [`Diagnostic`] for representing rule violations
//!
//! ## Example
//!
//! ```ignore
//! use stylecheck_core::{Checker, Spec};
//!
//! let resolution = Spec::resolve("lang.c.whitespace.NoTabsRule", &registry)?;
//! let checker = Checker::new(resolution.spec);
//! for diagnostic in checker.check_line("main.c", 4, "\tprintf(\"x\");") {
//!     eprintln!("{diagnostic}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod registry;
mod rule;
mod scanner;
mod spec;
mod types;

pub use checker::{Checker, FileOutcome};
pub use registry::{Registry, RegistryError, RuleFactory};
pub use rule::{Rule, RuleBox};
pub use scanner::{read_lines, ScannedFile, STDIN_PATH};
pub use spec::{Resolution, Spec, SpecError};
pub use types::{CheckResult, Diagnostic};
