use criterion::{black_box, criterion_group, criterion_main, Criterion};
use whit_core::{Light, Plane, Scene, Sphere};
use whit_renderer::{render, trace, Camera, Ray, RenderConfig, Vec3};

fn bench_scene() -> Scene {
    let mut scene = Scene::new(64)
        .with_plane(
            Plane::new(
                Vec3::new(0.0, -2.0, -12.0),
                Vec3::Y,
                Vec3::Z,
                20.0,
                20.0,
                Vec3::splat(0.8),
            )
            .with_reflectivity(0.3),
        )
        .with_light(Light::new(Vec3::new(0.0, 20.0, 0.0), Vec3::ONE))
        .with_light(Light::new(Vec3::new(-10.0, 5.0, -5.0), Vec3::splat(0.4)));

    for i in 0..5 {
        let x = i as f32 * 2.5 - 5.0;
        scene.spheres.push(
            Sphere::new(Vec3::new(x, 0.0, -12.0), 1.0, Vec3::new(0.9, 0.3, 0.2))
                .with_reflectivity(0.5),
        );
    }
    scene
}

fn bench_trace(c: &mut Criterion) {
    let scene = bench_scene();
    let config = RenderConfig::default();
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.05, -1.0).normalize());

    c.bench_function("trace_single_ray", |b| {
        b.iter(|| trace(black_box(&ray), &scene, 0, &config))
    });
}

fn bench_render(c: &mut Criterion) {
    let scene = bench_scene();
    let config = RenderConfig::default();
    let camera = Camera::new(scene.size);

    c.bench_function("render_64x64", |b| {
        b.iter(|| render(&camera, black_box(&scene), &config).unwrap())
    });
}

criterion_group!(benches, bench_trace, bench_render);
criterion_main!(benches);
