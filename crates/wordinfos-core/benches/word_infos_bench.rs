// Criterion benchmarks for wordinfos-core.
//
// Measures the per-word hot loop of an analyzer: erase the buffer, prepend a
// handful of candidates, read them back.
//
// Run:
//   cargo bench -p wordinfos-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use wordinfos_core::WordInfos;

const FORMS: [&str; 8] = [
    "koira", "koiran", "koiraa", "koirassa", "koirasta", "koiraan", "koiralla", "koiralta",
];

/// Fill a reused buffer to capacity, one word at a time.
fn bench_prepend_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend_erase");
    for capacity in [1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            let mut infos = WordInfos::new(capacity);
            b.iter(|| {
                infos.erase();
                for (i, form) in FORMS.iter().take(capacity).enumerate() {
                    let _ = infos.prepend_word(form.to_string(), 1, i as u16);
                }
                std::hint::black_box(infos.len());
            });
        });
    }
    group.finish();
}

/// Prepends into a saturated buffer: every call is rejected.
fn bench_rejected_prepend(c: &mut Criterion) {
    let mut infos = WordInfos::new(2);
    infos.prepend_word("koira".to_string(), 1, 1).unwrap();
    infos.prepend_word("kissa".to_string(), 1, 2).unwrap();

    c.bench_function("rejected_prepend", |b| {
        b.iter(|| {
            let err = infos.prepend_word(String::new(), 1, 3).unwrap_err();
            std::hint::black_box(err.into_form());
        });
    });
}

/// Read back every field of a full buffer.
fn bench_read_back(c: &mut Criterion) {
    let mut infos = WordInfos::new(FORMS.len());
    for (i, form) in FORMS.iter().enumerate() {
        infos
            .prepend_word_with_prediction(form.to_string(), 1, i as u16, i % 2 == 0)
            .unwrap();
    }

    c.bench_function("read_back_8", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for index in 0..infos.len() {
                total += infos.normal_form(index).map(String::len).unwrap_or(0);
                total += usize::from(infos.normal_form_id(index).unwrap_or(0));
                total += usize::from(infos.form_id(index).unwrap_or(0));
            }
            std::hint::black_box(total);
        });
    });
}

criterion_group!(
    benches,
    bench_prepend_erase,
    bench_rejected_prepend,
    bench_read_back,
);
criterion_main!(benches);
