//! Process-wide catalog mapping rule identifiers to constructors.

use std::collections::BTreeMap;

use crate::rule::RuleBox;

/// Constructor for a registered rule.
///
/// Rules are stateless, so the registry stores a factory rather than an
/// instance and builds a fresh box per lookup.
pub type RuleFactory = fn() -> RuleBox;

/// Errors raised while populating a [`Registry`].
///
/// These are configuration errors and are fatal at startup; a registry
/// that failed to build must not be used for checking.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The identifier was already registered.
    #[error("rule '{identifier}' is already registered")]
    Duplicate {
        /// The offending identifier.
        identifier: String,
    },

    /// The rule reports an empty description.
    #[error("rule '{identifier}' has an empty description")]
    EmptyDescription {
        /// The offending identifier.
        identifier: String,
    },
}

/// A catalog of named rules, append-only at startup.
///
/// Identifiers are fully qualified, dot-separated names like
/// `lang.c.whitespace.NoTabsRule`: a module path under a language
/// namespace followed by the rule name. The namespace is a discovery and
/// grouping convenience only; it is not enforced at check time.
///
/// Keys live in a `BTreeMap`, so every enumeration the registry offers is
/// alphabetical and stable across runs.
#[derive(Default)]
pub struct Registry {
    rules: BTreeMap<String, RuleFactory>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule constructor under `identifier`.
    ///
    /// The factory is invoked once here to validate the rule's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is already present or the rule
    /// has an empty description.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        factory: RuleFactory,
    ) -> Result<(), RegistryError> {
        let identifier = identifier.into();

        if factory().description().is_empty() {
            return Err(RegistryError::EmptyDescription { identifier });
        }
        if self.rules.contains_key(&identifier) {
            return Err(RegistryError::Duplicate { identifier });
        }

        tracing::debug!("Registered rule {identifier}");
        self.rules.insert(identifier, factory);
        Ok(())
    }

    /// Instantiates the rule registered under `identifier`, if any.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<RuleBox> {
        self.rules.get(identifier).map(|factory| factory())
    }

    /// Returns every identifier reachable under a language namespace,
    /// walking all sub-namespaces, in alphabetical order.
    ///
    /// `lang` is the bare language name, e.g. `c` matches
    /// `lang.c.whitespace.NoTabsRule`.
    #[must_use]
    pub fn list(&self, lang: &str) -> Vec<String> {
        let prefix = format!("lang.{lang}.");
        self.rules
            .keys()
            .filter(|id| id.starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Iterates over all registered identifiers in alphabetical order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
