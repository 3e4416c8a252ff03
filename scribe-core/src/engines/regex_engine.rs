// scribe-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` implementation that uses regular expressions
//! to identify and redact secrets.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::NoExpand;

use crate::config::RuleSource;
use crate::engine::{SanitizationEngine, REDACTION_PLACEHOLDER};
use crate::sanitizers::compiler::{load_rules, CompiledRules, LoadStatus, RuleSetLoad};

/// The packaged rules, compiled on first use and shared from then on.
static DEFAULT_ENGINE: Lazy<Arc<RegexEngine>> =
    Lazy::new(|| Arc::new(RegexEngine::load(&RuleSource::Embedded)));

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    status: LoadStatus,
}

impl RegexEngine {
    /// Wraps an already compiled rule set.
    pub fn new(compiled_rules: CompiledRules) -> Self {
        Self {
            compiled_rules,
            status: LoadStatus::Complete,
        }
    }

    /// Loads and compiles `source`. Never fails; check [`RegexEngine::load_status`]
    /// to see whether any rules were lost on the way.
    pub fn load(source: &RuleSource) -> Self {
        Self::from(load_rules(source))
    }

    /// The engine over the packaged rules, shared by every caller in the process.
    pub fn shared_default() -> Arc<RegexEngine> {
        Arc::clone(&DEFAULT_ENGINE)
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    /// True when the source was unavailable or some rules failed to compile.
    pub fn is_degraded(&self) -> bool {
        self.status.is_degraded()
    }

    /// Rule names in the order they are applied.
    pub fn rule_names(&self) -> Vec<&str> {
        self.compiled_rules.names().collect()
    }
}

impl From<RuleSetLoad> for RegexEngine {
    fn from(load: RuleSetLoad) -> Self {
        Self {
            compiled_rules: load.rules,
            status: load.status,
        }
    }
}

impl SanitizationEngine for RegexEngine {
    /// Rules run one after another, each on the output of the previous one,
    /// so a span an earlier rule replaced is never seen by a later rule.
    fn sanitize(&self, content: &str) -> String {
        let mut sanitized = Cow::Borrowed(content);
        for rule in &self.compiled_rules.rules {
            let replaced = match rule.regex.replace_all(&sanitized, NoExpand(REDACTION_PLACEHOLDER)) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            sanitized = Cow::Owned(replaced);
        }
        sanitized.into_owned()
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }
}
