use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inference_engine::Advisor;
use requirements::RequirementSet;
use rule_catalog::RuleCatalog;

fn bench_evaluate(c: &mut Criterion) {
    let catalog = RuleCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../../rules/catalog.toml"))
        .expect("bundled catalog should load");
    let advisor = Advisor::new(catalog);

    let sparse = RequirementSet::from_pairs([("project_type", "ecommerce")]).unwrap();
    let dense = RequirementSet::from_pairs([
        ("project_type", "social"),
        ("seo_important", "yes"),
        ("realtime", "yes"),
        ("team_size", "medium"),
        ("timeline", "fast"),
        ("budget", "medium"),
        ("team_experience", "javascript"),
        ("scalability", "high"),
        ("data_structure", "flexible"),
        ("type_safety", "important"),
    ])
    .unwrap();

    c.bench_function("evaluate_sparse", |b| {
        b.iter(|| advisor.evaluate(black_box(&sparse)))
    });
    c.bench_function("evaluate_dense", |b| {
        b.iter(|| advisor.evaluate(black_box(&dense)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
