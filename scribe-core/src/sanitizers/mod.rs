//! Rule compilation for scribe.
//!
//! Turns a rule source into the ordered, compiled rule set the redaction
//! engine applies, recording whether the load was clean or degraded.

pub mod compiler;
