//! External Rule Definition Loader
//!
//! Rule definitions are read through the `config` crate, so any format it
//! understands (TOML, JSON, YAML, ...) can serve as the knowledge source.
//! Definitions must sit in a top-level `rules` array; array order is
//! catalog order. Unrecognised fields are rejected, so a misspelled
//! `when` cannot silently turn a rule into an unconditional one.

use crate::recommendation::TechStack;
use crate::rule::{Condition, RecommendationRule};
use crate::CatalogLoadError;
use config::{Config, FileFormat, Source};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    rules: Vec<RuleDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDefinition {
    id: String,
    frontend: String,
    backend: String,
    database: String,
    confidence: f64,
    reason: String,
    #[serde(default)]
    when: Vec<ConditionDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConditionDefinition {
    key: String,
    value: String,
}

impl RuleDefinition {
    fn into_rule(self, index: usize) -> Result<RecommendationRule, CatalogLoadError> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogLoadError::EmptyIdentifier { index });
        }

        let conditions = self
            .when
            .iter()
            .map(|c| Condition::parse(&id, &c.key, &c.value))
            .collect::<Result<Vec<_>, _>>()?;

        RecommendationRule::new(
            id,
            conditions,
            TechStack::new(self.frontend, self.backend, self.database),
            self.confidence,
            self.reason,
        )
    }
}

/// Read rule definitions from a file; the format follows the extension
pub(crate) fn load_file(path: &Path) -> Result<Vec<RecommendationRule>, CatalogLoadError> {
    debug!("Reading rule definitions from {}", path.display());
    read(config::File::from(path))
}

/// Read rule definitions from in-memory text
pub(crate) fn load_str(
    text: &str,
    format: FileFormat,
) -> Result<Vec<RecommendationRule>, CatalogLoadError> {
    read(config::File::from_str(text, format))
}

fn read<S>(source: S) -> Result<Vec<RecommendationRule>, CatalogLoadError>
where
    S: Source + Send + Sync + 'static,
{
    let document: CatalogDocument = Config::builder()
        .add_source(source)
        .build()?
        .try_deserialize()?;

    document
        .rules
        .into_iter()
        .enumerate()
        .map(|(index, definition)| definition.into_rule(index))
        .collect()
}
