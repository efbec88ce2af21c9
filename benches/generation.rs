use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use undercroft::data::weighted_choice;
use undercroft::{generate_floor, DungeonConfig, GameConfig, SpawnTables};

fn bench_generate_floor(c: &mut Criterion) {
    let config = DungeonConfig::default();
    let spawns = SpawnTables::default();
    let player = GameConfig::default().new_player();

    let mut group = c.benchmark_group("generate_floor");
    for depth in [1u32, 5, 10] {
        group.bench_function(format!("depth_{depth}"), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                generate_floor(&mut rng, black_box(depth), &config, &spawns, player.clone())
                    .expect("default config generates")
            })
        });
    }
    group.finish();
}

fn bench_weighted_choice(c: &mut Criterion) {
    let weights = [("orc", 80u32), ("troll", 60), ("dragon", 5)];
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("weighted_choice", |b| {
        b.iter(|| weighted_choice(&mut rng, black_box(&weights)))
    });
}

criterion_group!(benches, bench_generate_floor, bench_weighted_choice);
criterion_main!(benches);
