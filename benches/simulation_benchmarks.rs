//! Performance benchmarks for the leave simulator.
//!
//! Covers the two hot paths: working-day counting against the South African
//! calendar, and full monthly simulation runs of increasing length.
//!
//! Run with: `cargo bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_sim::calendar::{SouthAfrica, WorkingDayCalendar};
use leave_sim::config::{ConfigLoader, SimulationWindow};
use leave_sim::simulation::Simulation;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Benchmark: counting working days over a festive-season interval.
fn bench_working_days(c: &mut Criterion) {
    let cal = SouthAfrica;
    c.bench_function("working_days_festive_season", |b| {
        b.iter(|| cal.working_days_between(black_box(date(2012, 12, 21)), black_box(date(2013, 1, 11))))
    });
}

/// Benchmark: building the schedule from the embedded dataset.
fn bench_schedule_build(c: &mut Criterion) {
    let config = ConfigLoader::embedded().expect("Failed to load dataset");
    c.bench_function("schedule_build_embedded", |b| {
        b.iter(|| Simulation::from_dataset(black_box(config.dataset()), &SouthAfrica).unwrap())
    });
}

/// Benchmark: full simulation runs over windows of increasing length.
fn bench_simulation_years(c: &mut Criterion) {
    let config = ConfigLoader::embedded().expect("Failed to load dataset");
    let base = Simulation::from_dataset(config.dataset(), &SouthAfrica).unwrap();

    let mut group = c.benchmark_group("simulation");
    for years in [1, 5, 10, 25].iter() {
        let window = SimulationWindow::new(date(2011, 1, 1), date(2011 + years, 1, 1));
        group.throughput(Throughput::Elements((*years as u64) * 12));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| {
                let mut sim = base.clone();
                black_box(sim.run(window).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_working_days,
    bench_schedule_build,
    bench_simulation_years,
);
criterion_main!(benches);
