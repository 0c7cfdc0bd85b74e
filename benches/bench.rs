// Criterion benchmarks for SentimentSense

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sentiment_sense::core::{score_rows, Scorer};

fn bench_score_single(c: &mut Criterion) {
    let scorer = Scorer::new();

    c.bench_function("score_single_text", |b| {
        b.iter(|| {
            scorer.score(black_box(
                "The plot was gripping but the ending fell completely flat.",
            ))
        });
    });
}

fn bench_score_empty(c: &mut Criterion) {
    let scorer = Scorer::new();

    c.bench_function("score_empty_text", |b| {
        b.iter(|| scorer.score(black_box("")));
    });
}

fn bench_score_csv(c: &mut Criterion) {
    let scorer = Scorer::new();

    let mut group = c.benchmark_group("score_csv");
    for rows in [10usize, 100, 1000] {
        let mut data = String::from("text\n");
        for i in 0..rows {
            data.push_str(&format!(
                "Review {} was surprisingly good and I would recommend it\n",
                i
            ));
        }

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| score_rows(&scorer, black_box(data.as_bytes())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score_single, bench_score_empty, bench_score_csv);
criterion_main!(benches);
