//! Whitted-style recursive tracer.
//!
//! For each ray: find the nearest sphere or plane, shade it with every
//! point light (hard shadows cast by spheres only), and for reflective
//! surfaces blend in the colour seen along the mirror direction.

use whit_core::{PlaneBounds, Scene};
use whit_math::{reflect, Ray, Vec3};

use crate::renderer::RenderConfig;

/// RGB colour, unclamped.
pub type Color = Vec3;

/// Which primitive a ray hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Index into `Scene::spheres`
    Sphere(usize),
    /// Index into `Scene::planes`
    Plane(usize),
}

/// The nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray (`tnear`)
    pub t: f32,
    pub surface: Surface,
}

/// Counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Primary plus reflection rays traced (shadow rays excluded)
    pub rays: u64,
    /// Deepest recursion level reached
    pub deepest: u32,
}

/// Local shading inputs at a hit point.
struct ShadingPoint {
    point: Vec3,
    normal: Vec3,
    color: Color,
    reflectivity: f32,
    /// Offset applied to secondary ray origins leaving this point
    bias: f32,
}

/// Find the nearest primitive along `ray`.
///
/// Spheres are scanned first, so a plane only wins at a strictly smaller
/// distance. A sphere hit uses its entry distance, or the exit distance
/// when the entry lies behind the origin.
pub fn nearest_hit(ray: &Ray, scene: &Scene, bounds: PlaneBounds) -> Option<HitRecord> {
    let mut tnear = f32::INFINITY;
    let mut nearest = None;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        if let Some(hit) = sphere.intersect(ray) {
            let t = hit.nearest();
            if t < tnear {
                tnear = t;
                nearest = Some(HitRecord {
                    t,
                    surface: Surface::Sphere(index),
                });
            }
        }
    }

    for (index, plane) in scene.planes.iter().enumerate() {
        if let Some(hit) = plane.intersect(ray, bounds) {
            if hit.t < tnear {
                tnear = hit.t;
                nearest = Some(HitRecord {
                    t: hit.t,
                    surface: Surface::Plane(index),
                });
            }
        }
    }

    nearest
}

/// Trace a ray and return the colour it sees, or `None` if it hits nothing.
///
/// `depth` is the number of reflections already taken; pass 0 for a
/// camera ray.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Option<Color> {
    let mut stats = TraceStats::default();
    trace_with_stats(ray, scene, depth, config, &mut stats)
}

/// [`trace`], recording ray counts into `stats`.
pub fn trace_with_stats(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Option<Color> {
    stats.rays += 1;
    stats.deepest = stats.deepest.max(depth);

    let hit = nearest_hit(ray, scene, config.plane_bounds)?;
    let shading = shading_point(ray, &hit, scene, config);

    let reflection = if shading.reflectivity > 0.0 && depth < config.max_depth {
        let direction = reflect(ray.direction, shading.normal).normalize();
        trace_with_stats(&shading.secondary_ray(direction), scene, depth + 1, config, stats)
    } else {
        None
    };

    // A reflected ray that escapes the scene contributes nothing
    let reflected = reflection.map_or(Color::ZERO, |color| color * shading.reflectivity);

    let color = scene
        .lights
        .iter()
        .fold(Color::ZERO, |acc, light| {
            acc + (reflected + diffuse(&shading, light.location, light.color, scene))
        });

    Some(color)
}

fn shading_point(ray: &Ray, hit: &HitRecord, scene: &Scene, config: &RenderConfig) -> ShadingPoint {
    let point = ray.at(hit.t);

    match hit.surface {
        Surface::Sphere(index) => {
            let sphere = &scene.spheres[index];
            ShadingPoint {
                point,
                normal: sphere.normal_at(point),
                color: sphere.color,
                reflectivity: sphere.reflectivity,
                bias: config.bias,
            }
        }
        Surface::Plane(index) => {
            let plane = &scene.planes[index];
            // Without an origin offset a reflected ray re-hits the plane at
            // t ~ 0, so planes only reflect when their rays are offset.
            let (reflectivity, bias) = if config.offset_plane_rays {
                (plane.reflectivity, config.bias)
            } else {
                (0.0, 0.0)
            };
            ShadingPoint {
                point,
                normal: plane.unit_normal(),
                color: plane.color,
                reflectivity,
                bias,
            }
        }
    }
}

impl ShadingPoint {
    /// Reflection or shadow ray leaving this point.
    fn secondary_ray(&self, direction: Vec3) -> Ray {
        Ray::offset(self.point, self.normal, self.bias, direction)
    }
}

/// Lambert term for one light, zeroed when a sphere blocks the way.
fn diffuse(shading: &ShadingPoint, light_location: Vec3, light_color: Color, scene: &Scene) -> Color {
    let light_dir = (light_location - shading.point).normalize();
    let transmission = transmission(shading, light_dir, scene);

    shading.color * transmission * shading.normal.dot(light_dir).max(0.0) * light_color
}

/// 0 if any sphere lies along the shadow ray, else 1.
///
/// Planes never cast shadows, and occluders beyond the light still count.
fn transmission(shading: &ShadingPoint, light_dir: Vec3, scene: &Scene) -> f32 {
    let shadow_ray = shading.secondary_ray(light_dir);
    let blocked = scene
        .spheres
        .iter()
        .any(|sphere| sphere.intersect(&shadow_ray).is_some());

    if blocked {
        0.0
    } else {
        1.0
    }
}
