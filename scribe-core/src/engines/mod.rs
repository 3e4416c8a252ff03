// scribe-core/src/engines/mod.rs
//! Concrete `SanitizationEngine` implementations.

pub mod regex_engine;
