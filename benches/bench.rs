// Criterion benchmarks for Campus Connect

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use campus_connect::core::{affinity::{jaccard, rank}, tags::{tag_set, TagSet}};
use campus_connect::models::PeerProfile;

const TAG_VOCAB: &[&str] = &[
    "android", "kotlin", "ui", "cloud", "firebase", "backend", "ml", "genai",
    "python", "figma", "web", "rust", "go", "sql", "devops", "security",
];

fn create_candidate(id: usize) -> PeerProfile {
    let skills: Vec<String> = (0..4)
        .map(|i| TAG_VOCAB[(id * 3 + i) % TAG_VOCAB.len()].to_string())
        .collect();

    PeerProfile {
        id: id.to_string(),
        name: format!("User {}", id),
        year: "2nd Year".to_string(),
        branch: "CSE".to_string(),
        skills,
        looking_for: vec![],
        bio: String::new(),
    }
}

fn viewer_tags() -> TagSet {
    tag_set(["android", "kotlin", "ui", "cloud"])
}

fn bench_jaccard(c: &mut Criterion) {
    let a = viewer_tags();
    let b = tag_set(["ui", "figma", "web"]);

    c.bench_function("jaccard", |bench| {
        bench.iter(|| jaccard(black_box(&a), black_box(&b)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let viewer = viewer_tags();
    let mut group = c.benchmark_group("rank");

    for size in [4, 100, 1000] {
        let pool: Vec<PeerProfile> = (0..size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |bench, pool| {
            bench.iter(|| rank(black_box(&viewer), black_box(pool)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_jaccard, bench_rank);
criterion_main!(benches);
