//! Rule sources for `scribe-core`.
//!
//! A rule source is a flat mapping of rule name to regex pattern, either the
//! JSON document packaged with the crate or one supplied by the caller. This
//! module reads a source into [`RedactionRule`]s and owns the ordering policy
//! applied before compilation.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The packaged rule document.
const DEFAULT_RULES_JSON: &str = include_str!("../config/default_rules.json");

/// Represents a single named redaction rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RedactionRule {
    /// Unique identifier for the rule (e.g., "aws_access_key_id").
    pub name: String,
    /// The regex pattern string.
    pub pattern: String,
}

impl RedactionRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Where a rule set comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleSource {
    /// The JSON document compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file on disk, or YAML when the extension is `.yaml`/`.yml`.
    File(PathBuf),
    /// A JSON document held in memory.
    Json(String),
    /// Rules already parsed into a mapping.
    Map(HashMap<String, String>),
}

impl RuleSource {
    /// Short human-readable label used in log lines and errors.
    pub fn source_name(&self) -> String {
        match self {
            RuleSource::Embedded => "embedded default_rules.json".to_string(),
            RuleSource::File(path) => path.display().to_string(),
            RuleSource::Json(_) => "inline JSON".to_string(),
            RuleSource::Map(_) => "in-memory rule map".to_string(),
        }
    }

    /// Reads the source into rules. The result is not ordered; see [`order_rules`].
    pub fn read(&self) -> Result<Vec<RedactionRule>> {
        let map = match self {
            RuleSource::Embedded => {
                debug!("Loading default rules from embedded string...");
                parse_json(DEFAULT_RULES_JSON).context("Failed to parse default rules")?
            }
            RuleSource::File(path) => load_map_from_file(path)?,
            RuleSource::Json(text) => parse_json(text).context("Failed to parse inline rules")?,
            RuleSource::Map(map) => map.clone(),
        };

        debug!("Read {} rules from {}.", map.len(), self.source_name());
        Ok(map
            .into_iter()
            .map(|(name, pattern)| RedactionRule { name, pattern })
            .collect())
    }
}

fn parse_json(text: &str) -> Result<HashMap<String, String>> {
    Ok(serde_json::from_str(text)?)
}

fn load_map_from_file(path: &Path) -> Result<HashMap<String, String>> {
    info!("Loading custom rules from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let map = if is_yaml {
        serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse rules file {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse rules file {}", path.display()))?
    };
    Ok(map)
}

/// Sorts rules by name in descending lexicographic order.
///
/// Rules are applied in this order and each one sees the output of the
/// previous ones, so the final text depends on it. Names are unique, which
/// makes this a total order.
pub fn order_rules(rules: &mut [RedactionRule]) {
    rules.sort_by(|a, b| b.name.cmp(&a.name));
}
