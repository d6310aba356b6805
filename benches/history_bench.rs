//! Benchmarks for the mood history engine
//!
//! Run with: cargo bench

use chrono::Weekday;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use mindspace::{Mood, MoodHistory, SeededSource, TrackerSession};

const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn bench_generate(c: &mut Criterion) {
    c.bench_function("history_generate", |b| {
        let mut rng = SeededSource::new(1);
        b.iter(|| MoodHistory::generate(black_box(&mut rng)))
    });
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_apply");

    for count in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("apply_{}", count), |b| {
            let mut rng = SeededSource::new(2);
            let base = MoodHistory::generate(&mut rng);

            b.iter(|| {
                let mut history = base.clone();
                for i in 0..count {
                    let day = DAYS[i % DAYS.len()];
                    let mood = Mood::ALL[i % Mood::ALL.len()];
                    history.apply(black_box(day), mood.profile());
                }
                history
            })
        });
    }

    group.finish();
}

fn bench_session_capture_cycle(c: &mut Criterion) {
    c.bench_function("session_capture_cycle", |b| {
        b.iter_batched(
            || TrackerSession::new(&mut SeededSource::new(3)),
            |mut session| {
                let mut rng = SeededSource::new(4);
                let ticket = session
                    .begin_capture(mindspace::CapturedFrame::new(
                        "data:image/jpeg;base64,bench",
                    ))
                    .unwrap();
                let mood = Mood::sample(&mut rng);
                session.complete_capture(black_box(ticket), mood, Weekday::Wed);
                session
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_apply, bench_session_capture_cycle);
criterion_main!(benches);
