use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wiresim::{extract, PixelGrid, Simulation};

fn random_grid(width: u32, height: u32, seed: u64) -> PixelGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..width as usize * height as usize)
        .map(|_| {
            if rng.gen_bool(0.4) {
                rng.gen_range(1u8..=7)
            } else {
                0
            }
        })
        .collect();
    PixelGrid::new(width, height, cells).unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let grid = random_grid(128, 128, 42);
    c.bench_function("extract_128x128", |b| {
        b.iter(|| black_box(extract(&grid)))
    });
}

fn bench_step(c: &mut Criterion) {
    let sim = Simulation::from_grid(&random_grid(128, 128, 42));
    c.bench_function("step_128x128", |b| b.iter(|| black_box(sim.step())));
}

fn bench_state_hash(c: &mut Criterion) {
    let sim = Simulation::from_grid(&random_grid(128, 128, 42));
    c.bench_function("state_hash_128x128", |b| {
        b.iter(|| black_box(sim.state_hash()))
    });
}

criterion_group!(benches, bench_extract, bench_step, bench_state_hash);
criterion_main!(benches);
