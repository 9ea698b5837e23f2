use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_core::mapgen::{random_terrain, TerrainMix};
use maze_core::{Extent, GraphConfig, GridGraph, Point};
use maze_paths::Strategy;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_map(size: i32) -> (GridGraph, Point, Point) {
    let extent = Extent::new(size, size);
    let mut rng = StdRng::seed_from_u64(7);
    let mix = TerrainMix {
        obstacle: 0.2,
        swamp: 0.2,
    };
    let terrain = random_terrain(extent, mix, &mut rng);
    let map = GridGraph::new(size, size, terrain, GraphConfig::default()).unwrap();
    (map, Point::new(0, 0), Point::new(size - 1, size - 1))
}

fn bench_map(c: &mut Criterion, size: i32) {
    let (map, start, goal) = random_map(size);

    for strategy in Strategy::ALL {
        c.bench_function(&format!("{strategy}_{size}"), |b| {
            b.iter(|| {
                strategy
                    .find_path(&map, black_box(start), black_box(goal))
                    .unwrap()
            })
        });
    }
}

pub fn map_small(c: &mut Criterion) {
    bench_map(c, 32);
}

pub fn map_medium(c: &mut Criterion) {
    bench_map(c, 128);
}

pub fn map_large(c: &mut Criterion) {
    bench_map(c, 512);
}

criterion_group!(benches, map_small, map_medium, map_large);
criterion_main!(benches);
