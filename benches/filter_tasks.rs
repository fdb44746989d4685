//! Filter and persistence benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench filter_tasks
//! ```

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use taskdeck::adapters::InMemoryKeyValueStore;
use taskdeck::{
    filter_tasks, parse_stored_tasks, FilterState, KeyValueStore, PriorityFilter, StatusFilter,
    Task, TaskPersistence, TaskPriority,
};

fn make_tasks(n: usize) -> Vec<Task> {
    (0..n)
        .map(|i| Task {
            id: format!("task-{i:06}"),
            title: format!("Task number {i}"),
            description: (i % 3 == 0).then(|| format!("Details for report {i}")),
            priority: [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High][i % 3],
            due_date: (i % 4 != 0).then(|| format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
            completed: i % 5 == 0,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        })
        .collect()
}

// =============================================================================
// Filter + sort
// =============================================================================

fn filter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_tasks");

    let narrow = FilterState::default()
        .with_search("report")
        .with_priority(PriorityFilter::High)
        .with_status(StatusFilter::Active)
        .with_due_range(Some("2024-03-01".to_string()), Some("2024-09-30".to_string()));

    for size in [100, 1_000, 10_000] {
        let tasks = make_tasks(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("default", size), &tasks, |b, tasks| {
            let filters = FilterState::default();
            b.iter(|| filter_tasks(black_box(tasks), &filters));
        });

        group.bench_with_input(BenchmarkId::new("all_criteria", size), &tasks, |b, tasks| {
            b.iter(|| filter_tasks(black_box(tasks), &narrow));
        });
    }

    group.finish();
}

// =============================================================================
// Load + save
// =============================================================================

fn persistence_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("persistence");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let tasks = make_tasks(1_000);
    let raw = serde_json::to_string(&tasks).unwrap();

    group.bench_function("parse_stored_1000", |b| {
        b.iter(|| parse_stored_tasks(black_box(&raw)));
    });

    let store = Arc::new(InMemoryKeyValueStore::new());
    runtime
        .block_on(store.set("task-manager-tasks", &raw))
        .unwrap();
    let persistence = TaskPersistence::new(store, "task-manager-tasks");
    let list = runtime.block_on(persistence.load());

    group.bench_function("load_1000", |b| {
        b.to_async(&runtime).iter(|| persistence.load());
    });

    group.bench_function("save_1000", |b| {
        b.to_async(&runtime).iter(|| persistence.save(&list));
    });

    group.finish();
}

criterion_group!(benches, filter_benchmarks, persistence_benchmarks);
criterion_main!(benches);
