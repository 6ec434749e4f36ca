//! Rules for the C language namespace (`lang.c.*`).

pub mod whitespace;

use stylecheck_core::{Registry, RegistryError};

/// Registers every rule in the `c` namespace.
pub(crate) fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    whitespace::register(registry)
}
