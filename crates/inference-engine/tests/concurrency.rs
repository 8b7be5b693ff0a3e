//! Concurrent evaluations share nothing but the read-only catalog

use inference_engine::{Advisor, Report};
use rule_catalog::RuleCatalog;

fn advisor() -> Advisor {
    let catalog =
        RuleCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../../rules/catalog.toml")).unwrap();
    Advisor::new(catalog)
}

const INPUT_A: &[(&str, &str)] = &[("project_type", "ecommerce"), ("seo_important", "yes")];
const INPUT_B: &[(&str, &str)] = &[
    ("project_type", "analytics"),
    ("team_experience", "beginner"),
];

fn advise(advisor: &Advisor, input: &[(&str, &str)]) -> Report {
    advisor.advise(input.iter().copied()).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_matches_sequential() {
    let advisor = advisor();
    let expected_a = advise(&advisor, INPUT_A);
    let expected_b = advise(&advisor, INPUT_B);
    assert_ne!(expected_a, expected_b);

    let mut tasks = Vec::new();
    for i in 0..64 {
        let advisor = advisor.clone();
        let input = if i % 2 == 0 { INPUT_A } else { INPUT_B };
        tasks.push(tokio::spawn(async move { (i, advise(&advisor, input)) }));
    }

    for task in tasks {
        let (i, report) = task.await.unwrap();
        let expected = if i % 2 == 0 { &expected_a } else { &expected_b };
        assert_eq!(&report, expected);
    }
}

#[test]
fn order_of_evaluation_is_irrelevant() {
    let advisor = advisor();

    let a_first = (advise(&advisor, INPUT_A), advise(&advisor, INPUT_B));
    let b_first = {
        let b = advise(&advisor, INPUT_B);
        (advise(&advisor, INPUT_A), b)
    };
    assert_eq!(a_first, b_first);
}

#[test]
fn reload_during_evaluation_never_mixes_catalogs() {
    let advisor = advisor();
    let replacement = RuleCatalog::from_text(
        r#"
        [[rules]]
        id = "only"
        frontend = "svelte"
        backend = "go_gin"
        database = "sqlite"
        confidence = 0.5
        reason = "Replacement"
        "#,
        rule_catalog::CatalogFormat::Toml,
    )
    .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let advisor = advisor.clone();
            scope.spawn(move || {
                for _ in 0..200 {
                    let report = advise(&advisor, INPUT_A);
                    let from_replacement = report
                        .all_recommendations
                        .iter()
                        .filter(|r| r.rule_id() == Some("only"))
                        .count();
                    // The replacement has one unconditional rule and nothing else
                    if from_replacement > 0 {
                        assert_eq!(report.all_recommendations.len(), 1);
                    }
                }
            });
        }
        for _ in 0..20 {
            advisor.catalog().replace(replacement.clone());
        }
    });
}
