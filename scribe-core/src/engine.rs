// scribe-core/src/engine.rs
//! Defines the `SanitizationEngine` trait.
//!
//! The logger facade only needs "text in, redacted text out". Keeping that
//! behind a trait lets callers plug in their own engine, and lets tests use a
//! fixed one, without touching the facade.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizers::compiler::CompiledRules;

/// The fixed token every redacted span is replaced with.
pub const REDACTION_PLACEHOLDER: &str = "[REDACTED]";

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Returns `content` with every secret span replaced by
    /// [`REDACTION_PLACEHOLDER`]. Text without a match comes back unchanged.
    fn sanitize(&self, content: &str) -> String;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;
}
