//! Console presentation.

pub mod theme;
