use brdf_zoo::camera::{Camera, CameraMovement};
use brdf_zoo::demo::Demo;
use brdf_zoo::shading::ShadingSelection;
use brdf_zoo::{FrameUniforms, Projection};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: one mouse-look sample (basis recompute)
fn bench_rotation(c: &mut Criterion) {
    let mut camera = Camera::default();

    c.bench_function("camera_rotation", |b| {
        b.iter(|| camera.rotate(black_box(1.5), black_box(-0.75)))
    });
}

/// Benchmark: all six movement directions with bounds clamping
fn bench_movement(c: &mut Criterion) {
    let mut camera = Camera::default();
    camera.set_position_bounds(Demo::One.position_bounds());
    camera.rotate(120.0, 200.0);

    c.bench_function("camera_movement_all_directions", |b| {
        b.iter(|| {
            for direction in CameraMovement::ALL {
                camera.process_movement(direction, black_box(0.016));
            }
        })
    });
}

/// Benchmark: full per-frame uniform build (view, projection, inverse)
fn bench_frame_uniforms(c: &mut Criterion) {
    let mut camera = Camera::default();
    camera.rotate(45.0, 30.0);
    let projection = Projection::default();
    let selection = ShadingSelection::default();

    c.bench_function("frame_uniforms", |b| {
        b.iter(|| {
            black_box(FrameUniforms::new(
                black_box(&camera),
                (800, 600),
                projection,
                selection,
            ))
        })
    });
}

criterion_group!(benches, bench_rotation, bench_movement, bench_frame_uniforms);
criterion_main!(benches);
