use criterion::{criterion_group, criterion_main, Criterion, black_box};

use terrasculpt::brush::{apply_brush, BrushParams, StrokeDirection};
use terrasculpt::core::config::TerrainSettings;
use terrasculpt::math::Ray;
use terrasculpt::terrain::{pick, TerrainMesh};

use glam::Vec3;

fn bench_stroke_default(c: &mut Criterion) {
    let mut mesh = TerrainMesh::from_settings(&TerrainSettings::default());
    let params = BrushParams::default();

    c.bench_function("stroke_200x200_radius_10", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame += 1;
            // Alternate so the surface stays near flat
            let direction = if frame % 2 == 0 { StrokeDirection::Raise } else { StrokeDirection::Lower };
            apply_brush(&mut mesh, black_box(Vec3::ZERO), &params, direction)
        });
    });
}

fn bench_stroke_wide(c: &mut Criterion) {
    let mut mesh = TerrainMesh::from_settings(&TerrainSettings::default());
    let params = BrushParams::new(50.0, 0.5, 0.1);

    c.bench_function("stroke_200x200_radius_50", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame += 1;
            let direction = if frame % 2 == 0 { StrokeDirection::Raise } else { StrokeDirection::Lower };
            apply_brush(&mut mesh, black_box(Vec3::new(10.0, 0.0, -5.0)), &params, direction)
        });
    });
}

fn bench_pick(c: &mut Criterion) {
    let mesh = TerrainMesh::from_settings(&TerrainSettings::default());
    let eye = Vec3::new(0.0, 50.0, 100.0);
    let ray = Ray::new(eye, (Vec3::new(12.0, 0.0, -7.0) - eye).normalize());

    c.bench_function("pick_200x200", |b| {
        b.iter(|| pick(black_box(&mesh), black_box(&ray)))
    });
}

criterion_group!(benches, bench_stroke_default, bench_stroke_wide, bench_pick);
criterion_main!(benches);
