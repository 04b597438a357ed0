use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{Axial, GridConfig, HexGrid, WorldPosition};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let far = Axial::new(40, -25);
    group.bench_function("line", |b| {
        b.iter(|| black_box(Axial::ORIGIN).line_to(black_box(far)))
    });
    group.bench_function("range", |b| {
        b.iter(|| black_box(Axial::ORIGIN).range(black_box(20)))
    });

    // Same queries through a grid, so buffers come out of the pool
    let mut grid = HexGrid::new(GridConfig::default()).unwrap();
    group.bench_function("grid line", |b| {
        b.iter(|| {
            let line = grid.line(black_box(Axial::ORIGIN), black_box(far));
            grid.release(line);
        })
    });
    group.bench_function("grid range", |b| {
        b.iter(|| {
            let range = grid.range(black_box(Axial::ORIGIN), black_box(20));
            grid.release(range);
        })
    });

    let tiles = Axial::ORIGIN.spiral(10);
    group.bench_function("grid distance", |b| {
        b.iter(|| {
            for tile in &tiles {
                black_box(grid.distance(Axial::ORIGIN, *tile));
            }
        })
    });
    group.bench_function("world to hex", |b| {
        b.iter(|| {
            grid.world_to_hex(black_box(&WorldPosition::new(
                13.7, 0.0, -42.1,
            )))
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
