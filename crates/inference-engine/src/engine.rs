//! Inference Engine Implementation

use requirements::RequirementSet;
use rule_catalog::{Recommendation, RecommendationRule, RuleCatalog};
use tracing::debug;

/// Whether every condition of `rule` is present in `requirements`
pub fn fires(rule: &RecommendationRule, requirements: &RequirementSet) -> bool {
    rule.conditions()
        .iter()
        .all(|condition| condition.is_met_by(requirements))
}

/// Evaluate every rule once, in catalog order, and collect one
/// recommendation per fired rule.
///
/// `requirements` should already be expanded. Rules that do not fire
/// contribute nothing.
pub fn infer(requirements: &RequirementSet, catalog: &RuleCatalog) -> Vec<Recommendation> {
    let candidates: Vec<Recommendation> = catalog
        .iter()
        .filter(|rule| fires(rule, requirements))
        .inspect(|rule| debug!("Rule `{}` fired (conf={:.2})", rule.id(), rule.confidence()))
        .map(Recommendation::from_rule)
        .collect();

    debug!(
        "{} of {} rules fired for {} facts",
        candidates.len(),
        catalog.len(),
        requirements.len()
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use requirements::{RequirementKey as K, RequirementValue as V};
    use rule_catalog::{Condition, TechStack};

    fn rule(id: &str, conditions: &[(K, V)], confidence: f64) -> RecommendationRule {
        RecommendationRule::new(
            id,
            conditions.iter().map(|(k, v)| Condition::new(*k, *v)).collect(),
            TechStack::new(format!("{id}-fe"), "backend", "db"),
            confidence,
            format!("{id} reason"),
        )
        .unwrap()
    }

    fn set(pairs: &[(&str, &str)]) -> RequirementSet {
        RequirementSet::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_all_conditions_required() {
        let r = rule("r", &[(K::ProjectType, V::Ecommerce), (K::SeoImportant, V::Yes)], 0.9);

        assert!(fires(&r, &set(&[("project_type", "ecommerce"), ("seo_important", "yes")])));
        assert!(!fires(&r, &set(&[("project_type", "ecommerce")])));
        assert!(!fires(&r, &set(&[("project_type", "ecommerce"), ("seo_important", "no")])));
    }

    #[test]
    fn test_unconditional_rule_always_fires() {
        let r = rule("any", &[], 0.1);
        assert!(fires(&r, &RequirementSet::empty()));
    }

    #[test]
    fn test_collects_every_fired_rule_in_catalog_order() {
        let catalog = RuleCatalog::from_rules(vec![
            rule("a", &[(K::Realtime, V::Yes)], 0.6),
            rule("b", &[(K::Budget, V::Low)], 0.9),
            rule("c", &[(K::Realtime, V::Yes), (K::Budget, V::Low)], 0.7),
        ])
        .unwrap();

        let out = infer(&set(&[("realtime", "yes"), ("budget", "low")]), &catalog);
        let ids: Vec<_> = out.iter().filter_map(|r| r.rule_id()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_fired_rule_carries_static_confidence_and_reason() {
        let catalog = RuleCatalog::from_rules(vec![rule("a", &[(K::Realtime, V::Yes)], 0.6)]).unwrap();
        let out = infer(&set(&[("realtime", "yes")]), &catalog);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].confidence(), 0.6);
        assert_eq!(out[0].reason(), "a reason");
        assert_eq!(out[0].frontend(), "a-fe");
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let catalog = RuleCatalog::from_rules(vec![rule("a", &[(K::Realtime, V::Yes)], 0.6)]).unwrap();
        assert!(infer(&set(&[("realtime", "no")]), &catalog).is_empty());
        assert!(infer(&RequirementSet::empty(), &catalog).is_empty());
    }
}
