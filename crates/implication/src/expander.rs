//! Expander Implementation

use crate::table::{ImplicationRule, IMPLICATIONS};
use requirements::RequirementSet;
use tracing::debug;

/// Expand a requirement set with the built-in derivation table
pub fn expand(requirements: &RequirementSet) -> RequirementSet {
    expand_with(requirements, IMPLICATIONS)
}

/// Expand a requirement set with an explicit derivation table.
///
/// Triggers are matched against the input only, never against facts added
/// in the same pass. Explicit facts are never overwritten.
pub fn expand_with(requirements: &RequirementSet, rules: &[ImplicationRule]) -> RequirementSet {
    let mut expanded = requirements.clone();

    for rule in rules {
        let (trigger_key, trigger_value) = rule.trigger;
        if !requirements.contains(trigger_key, trigger_value) {
            continue;
        }

        let (implied_key, implied_value) = rule.implied;
        if expanded.contains_key(implied_key) {
            debug!(
                "Keeping explicit {}={} over implied {}",
                implied_key,
                expanded.get(implied_key).map(|v| v.as_str()).unwrap_or_default(),
                implied_value
            );
            continue;
        }

        debug!(
            "Implied {}={} from {}={}",
            implied_key, implied_value, trigger_key, trigger_value
        );
        expanded = expanded.with_fact_if_absent(implied_key, implied_value);
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::Index;
    use requirements::{RequirementKey as K, RequirementValue as V};

    fn set(pairs: &[(&str, &str)]) -> RequirementSet {
        RequirementSet::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_ecommerce_implies_payment() {
        let input = set(&[("project_type", "ecommerce")]);
        let expanded = expand(&input);

        assert!(expanded.contains(K::PaymentIntegration, V::Yes));
        assert!(expanded.contains(K::ProjectType, V::Ecommerce));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_analytics_implies_two_facts() {
        let expanded = expand(&set(&[("project_type", "analytics")]));
        assert!(expanded.contains(K::DataProcessing, V::Heavy));
        assert!(expanded.contains(K::Visualization, V::Important));
    }

    #[test]
    fn test_independent_triggers_combine() {
        let expanded = expand(&set(&[
            ("project_type", "social"),
            ("team_experience", "beginner"),
            ("infrastructure", "serverless"),
        ]));
        assert!(expanded.contains(K::UserGeneratedContent, V::Yes));
        assert!(expanded.contains(K::LearningCurve, V::Low));
        assert!(expanded.contains(K::Maintenance, V::Low));
        assert_eq!(expanded.len(), 6);
    }

    #[test]
    fn test_input_untouched() {
        let input = set(&[("project_type", "ecommerce")]);
        let before = input.clone();
        let _ = expand(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_no_trigger_no_change() {
        let input = set(&[("project_type", "cms"), ("budget", "low")]);
        assert_eq!(expand(&input), input);
        assert_eq!(expand(&RequirementSet::empty()), RequirementSet::empty());
    }

    #[test]
    fn test_implied_fact_does_not_chain() {
        // A table where the implied fact would trigger another rule
        let chained = [
            ImplicationRule::new((K::ProjectType, V::Gaming), (K::Realtime, V::Yes)),
            ImplicationRule::new((K::Realtime, V::Yes), (K::Scalability, V::High)),
        ];
        let expanded = expand_with(&set(&[("project_type", "gaming")]), &chained);

        assert!(expanded.contains(K::Realtime, V::Yes));
        assert!(!expanded.contains_key(K::Scalability));
    }

    fn arb_requirements() -> impl Strategy<Value = RequirementSet> {
        proptest::collection::vec(any::<Option<Index>>(), K::ALL.len()).prop_map(|picks| {
            RequirementSet::from_facts(
                K::ALL
                    .iter()
                    .zip(picks)
                    .filter_map(|(key, pick)| pick.map(|idx| (*key, *idx.get(key.allowed_values())))),
            )
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_expand_is_idempotent(input in arb_requirements()) {
            let once = expand(&input);
            prop_assert_eq!(expand(&once), once);
        }

        #[test]
        fn prop_expand_preserves_explicit_facts(input in arb_requirements()) {
            let expanded = expand(&input);
            for (key, value) in input.iter() {
                prop_assert!(expanded.contains(key, value));
            }
        }
    }
}
