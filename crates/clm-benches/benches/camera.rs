// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use clm_core::math::{self, Vec3};

fn bench_camera(c: &mut Criterion) {
    let fov = math::deg_to_rad(60.0);
    c.bench_function("perspective", |b| {
        b.iter(|| math::perspective(black_box(fov), black_box(16.0 / 9.0), 0.1, 100.0));
    });
    c.bench_function("try_perspective", |b| {
        b.iter(|| math::try_perspective(black_box(fov), black_box(16.0 / 9.0), 0.1, 100.0));
    });

    let position = Vec3::new(4.0, 3.0, 6.0);
    let target = Vec3::new(0.0, 0.5, 0.0);
    c.bench_function("look_at", |b| {
        b.iter(|| math::look_at(black_box(position), black_box(target), Vec3::UNIT_Y));
    });
    // Per-frame camera: view then view-projection.
    let proj = math::perspective(fov, 16.0 / 9.0, 0.1, 100.0);
    c.bench_function("view_projection", |b| {
        b.iter(|| proj * math::look_at(black_box(position), target, Vec3::UNIT_Y));
    });
}

criterion_group!(benches, bench_camera);
criterion_main!(benches);
