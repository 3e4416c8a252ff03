// File: scribe-core/src/headless.rs

//! `headless.rs`
//! One-shot redaction of a string outside of any logger, as used by the
//! `scribe redact` command.

use anyhow::{anyhow, Result};

use crate::config::RuleSource;
use crate::engine::SanitizationEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::sanitizers::compiler::LoadStatus;

/// Loads `source` and sanitizes `content` with it.
///
/// Unlike the logger, which degrades to pass-through, this refuses to run
/// when the source could not be loaded: a caller asking explicitly for
/// redaction should not get the secrets back unchanged. Rules dropped from a
/// partially valid source are only warned about.
pub fn headless_sanitize_string(source: &RuleSource, content: &str) -> Result<String> {
    let engine = RegexEngine::load(source);
    if let LoadStatus::Unavailable(e) = engine.load_status() {
        return Err(anyhow!("{}", e));
    }
    Ok(engine.sanitize(content))
}
