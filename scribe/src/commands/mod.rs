//! Implementations of the `scribe` subcommands.

pub mod emit;
pub mod inspect;
pub mod redact;
