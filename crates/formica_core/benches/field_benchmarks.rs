use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formica_core::pheromone::PheromoneField;
use formica_data::{TrailType, Vector2D};

fn seeded_field() -> PheromoneField {
    let mut field = PheromoneField::new(800, 600, 0.05);
    for i in 0..10_000 {
        let x = (i * 37) % 800;
        let y = (i * 91) % 600;
        field.deposit(x, y, TrailType::HomeMark, (i % 100) as f32);
    }
    field
}

fn bench_decay_all(c: &mut Criterion) {
    let mut field = seeded_field();
    c.bench_function("field_decay_800x600", |b| {
        b.iter(|| {
            field.decay_all();
            black_box(&field);
        })
    });
}

fn bench_strongest_in_window(c: &mut Criterion) {
    let field = seeded_field();
    c.bench_function("field_strongest_radius_5", |b| {
        b.iter(|| {
            black_box(field.strongest_in_window(
                black_box(Vector2D::new(400.0, 300.0)),
                5,
                Some(TrailType::HomeMark),
            ))
        })
    });
}

criterion_group!(benches, bench_decay_all, bench_strongest_in_window);
criterion_main!(benches);
