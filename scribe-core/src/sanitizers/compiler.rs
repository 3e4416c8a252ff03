//! compiler.rs - Turns a rule source into an ordered, compiled rule set.
//!
//! Loading never fails. A missing or unparseable source yields an empty rule
//! set, and a pattern that does not compile drops only that rule. Either way
//! the outcome is recorded in a [`LoadStatus`] next to the rules so callers
//! can tell a clean load from a degraded one.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{order_rules, RedactionRule, RuleSource, MAX_PATTERN_LENGTH};
use crate::errors::ScribeError;

/// Upper bound on the compiled size of a single rule.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Represents a single compiled redaction rule.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The unique name of the redaction rule.
    pub name: String,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
}

/// The ordered collection of compiled rules an engine applies.
#[derive(Debug, Clone, Default)]
pub struct CompiledRules {
    /// Rules in evaluation order (descending by name).
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }
}

/// How a rule set load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// Every rule in the source compiled.
    Complete,
    /// Some rules were dropped; the rest are in the set.
    Partial { dropped: Vec<ScribeError> },
    /// The source could not be read at all; the set is empty.
    Unavailable(ScribeError),
}

impl LoadStatus {
    /// True unless every rule made it into the set.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, LoadStatus::Complete)
    }
}

/// A compiled rule set together with the status of the load that produced it.
#[derive(Debug)]
pub struct RuleSetLoad {
    pub rules: CompiledRules,
    pub status: LoadStatus,
}

/// Compiles a single pattern with the engine-wide settings.
///
/// Patterns use the `regex` crate defaults: `.` does not match `\n` and `^`/`$`
/// anchor the whole input. A rule that must span lines says so itself, with
/// `(?s)` or a class such as `[\s\S]`.
pub fn compile_pattern(name: &str, pattern: &str) -> Result<Regex, ScribeError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ScribeError::PatternLengthExceeded(
            name.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ScribeError::RuleCompilation(name.to_string(), e))
}

/// Orders and compiles a list of rules.
///
/// Each rule compiles on its own; a failure drops that rule and is collected
/// into the returned status.
pub fn compile_rules(mut rules_to_compile: Vec<RedactionRule>) -> RuleSetLoad {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());
    order_rules(&mut rules_to_compile);

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut dropped = Vec::new();

    for rule in rules_to_compile {
        debug!(
            "Attempting to compile rule: '{}' with pattern '{:?}'",
            &rule.name, &rule.pattern
        );
        match compile_pattern(&rule.name, &rule.pattern) {
            Ok(regex) => {
                debug!(target: "scribe_core::sanitizer", "Rule '{}' compiled successfully.", &rule.name);
                compiled_rules.push(CompiledRule {
                    name: rule.name,
                    regex,
                });
            }
            Err(e) => {
                warn!("Dropping redaction rule: {}", e);
                dropped.push(e);
            }
        }
    }

    debug!(
        "Finished compiling rules. Total compiled: {}, dropped: {}.",
        compiled_rules.len(),
        dropped.len()
    );

    let status = if dropped.is_empty() {
        LoadStatus::Complete
    } else {
        LoadStatus::Partial { dropped }
    };

    RuleSetLoad {
        rules: CompiledRules {
            rules: compiled_rules,
        },
        status,
    }
}

/// Reads, orders and compiles the rules of `source`.
///
/// An unreadable source degrades to an empty rule set with
/// [`LoadStatus::Unavailable`].
pub fn load_rules(source: &RuleSource) -> RuleSetLoad {
    match source.read() {
        Ok(rules) => {
            let load = compile_rules(rules);
            info!(
                "Loaded {} redaction rules from {}.",
                load.rules.len(),
                source.source_name()
            );
            load
        }
        Err(e) => {
            let error = ScribeError::RuleLoad {
                source_name: source.source_name(),
                reason: format!("{:#}", e),
            };
            warn!("{}. Secret redaction is disabled.", error);
            RuleSetLoad {
                rules: CompiledRules::default(),
                status: LoadStatus::Unavailable(error),
            }
        }
    }
}
