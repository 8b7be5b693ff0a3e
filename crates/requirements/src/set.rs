//! Validated Requirement Set

use crate::error::ValidationError;
use crate::key::RequirementKey;
use crate::value::RequirementValue;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Immutable mapping of requirement keys to legal values.
///
/// A missing key means "unspecified"; there are no defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementSet {
    facts: BTreeMap<RequirementKey, RequirementValue>,
}

impl RequirementSet {
    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from raw key/value strings, validating every pair
    pub fn from_pairs<I, K, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let mut facts = BTreeMap::new();

        for (raw_key, raw_value) in pairs {
            let raw_key = raw_key.as_ref();
            let raw_value = raw_value.as_ref();

            let key: RequirementKey = raw_key.parse().map_err(|_| ValidationError::UnknownKey {
                key: raw_key.to_string(),
            })?;

            let value = raw_value
                .parse::<RequirementValue>()
                .ok()
                .filter(|value| key.allows(*value))
                .ok_or_else(|| ValidationError::IllegalValue {
                    key,
                    value: raw_value.to_string(),
                    allowed: key.allowed_list(),
                })?;

            if facts.insert(key, value).is_some() {
                return Err(ValidationError::DuplicateKey(key));
            }
        }

        debug!("Validated requirement set with {} facts", facts.len());
        Ok(Self { facts })
    }

    /// Build a set from typed facts, checking value legality and uniqueness
    pub fn from_facts<I>(facts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (RequirementKey, RequirementValue)>,
    {
        Self::from_pairs(facts.into_iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Value for a key, if specified
    pub fn get(&self, key: RequirementKey) -> Option<RequirementValue> {
        self.facts.get(&key).copied()
    }

    /// Whether the exact fact is present
    pub fn contains(&self, key: RequirementKey, value: RequirementValue) -> bool {
        self.get(key) == Some(value)
    }

    pub fn contains_key(&self, key: RequirementKey) -> bool {
        self.facts.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate facts in key order
    pub fn iter(&self) -> impl Iterator<Item = (RequirementKey, RequirementValue)> + '_ {
        self.facts.iter().map(|(k, v)| (*k, *v))
    }

    /// Wire form of the facts
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.as_str().to_string(), v.as_str().to_string()))
            .collect()
    }

    /// Copy of this set with one fact added, unless the key is already present.
    ///
    /// Callers are responsible for passing a value legal for the key.
    pub fn with_fact_if_absent(&self, key: RequirementKey, value: RequirementValue) -> Self {
        debug_assert!(key.allows(value), "{} is not legal for {}", value, key);
        let mut facts = self.facts.clone();
        facts.entry(key).or_insert(value);
        Self { facts }
    }
}
