//! Performance benchmarks for a3s-cron-text
//!
//! Run with: cargo bench

use a3s_cron_text::{classify, describe, validate_expression, Describer, EditorSession, Locale};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for token in ["*", "30", "*/15", "9-17", "1,3,5", "0-30/5", "MON"] {
                black_box(classify(black_box(token)));
            }
        });
    });
}

fn bench_describe(c: &mut Criterion) {
    c.bench_function("describe::fast_path", |b| {
        b.iter(|| describe(black_box("*/15 * * * *")));
    });

    c.bench_function("describe::composed", |b| {
        b.iter(|| describe(black_box("0,30 9-17 * 1-6 1-5")));
    });

    let chinese = Describer::new(Locale::Chinese);
    c.bench_function("describe::composed_zh", |b| {
        b.iter(|| chinese.describe(black_box("0,30 9-17 * 1-6 1-5")));
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_expression", |b| {
        b.iter(|| validate_expression(black_box("0 9 * * 1-5")));
    });
}

fn bench_editor(c: &mut Criterion) {
    c.bench_function("EditorSession::edit_field", |b| {
        let mut session = EditorSession::new();
        b.iter(|| {
            session.edit_field(1, black_box("9")).ok();
            black_box(session.description());
        });
    });
}

criterion_group!(benches, bench_classify, bench_describe, bench_validate, bench_editor);
criterion_main!(benches);
