// Dynamic (Arc<dyn MoveStrategy>) versus static dispatch of a move description.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vehicle_strategy::{FastMove, MoveStrategy, Vehicle};

struct StaticVehicle<S> {
    strategy: S,
}

impl<S: MoveStrategy> StaticVehicle<S> {
    fn perform_move(&self) -> String {
        self.strategy.describe_move()
    }
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("perform_move");

    let dynamic = Vehicle::car(Arc::new(FastMove));
    group.bench_function("dyn", |b| b.iter(|| black_box(&dynamic).perform_move()));

    let fixed = StaticVehicle { strategy: FastMove };
    group.bench_function("static", |b| b.iter(|| black_box(&fixed).perform_move()));

    group.finish();
}

criterion_group!(benches, benchmark_dispatch);
criterion_main!(benches);
