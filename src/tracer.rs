use crate::{
    material::{to_display_color, Material, BACKGROUND},
    optics::reflect,
    scene::{Intersection, Scene},
    Ray, FAR_DISTANCE,
};
use glam::DVec3;
use itertools::Itertools;
use log::{debug, trace};

/// The polyline a traced ray leaves behind and the color it carries back
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    /// The ray origin, every bounce point and a far away end point
    pub points: Vec<DVec3>,
    /// `radiance` scaled to 8 bit channels
    pub color: [u8; 3],
    pub radiance: DVec3,
}

impl Path {
    /// Consecutive point pairs, ready to be drawn as a line strip
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).length()).sum()
    }

    /// How many surfaces the ray bounced off before escaping or running out of bounces
    pub fn bounces(&self) -> usize {
        self.points.len().saturating_sub(2)
    }
}

/// Follows `ray` through the scene for at most `depth` bounces.
///
/// Returns every bounce point followed by the point where the ray leaves, and the color
/// gathered along the way. Colors are composed from the innermost bounce outwards.
pub fn shoot_ray(ray: Ray, scene: &Scene, depth: u32) -> (Vec<DVec3>, DVec3) {
    let mut points = Vec::new();
    let radiance = shoot(ray, scene, depth, &mut points, None);

    (points, radiance)
}

/// Traces `ray` and returns the full path starting at the ray origin.
pub fn trace_path(ray: Ray, scene: &Scene, max_bounces: u32) -> Path {
    trace(ray, scene, max_bounces, None)
}

/// Like `trace_path`, also appending every reflected ray it spawns to `rays`.
/// The reflected rays keep the color tag of the ray they came from.
pub fn trace_path_recording(
    ray: Ray,
    scene: &Scene,
    max_bounces: u32,
    rays: &mut Vec<Ray>,
) -> Path {
    trace(ray, scene, max_bounces, Some(rays))
}

fn trace(ray: Ray, scene: &Scene, max_bounces: u32, rays: Option<&mut Vec<Ray>>) -> Path {
    let mut points = vec![ray.origin];
    let radiance = shoot(ray, scene, max_bounces, &mut points, rays);

    let path = Path {
        color: to_display_color(radiance),
        points,
        radiance,
    };

    debug!(
        "Traced ray from {:?}: {} bounces, color {:?}",
        ray.origin,
        path.bounces(),
        path.color
    );

    path
}

// Walks the bounces iteratively so deep traces stay off the call stack. Points are pushed in
// path order, the color is composed afterwards starting from the last surface hit.
fn shoot(
    mut ray: Ray,
    scene: &Scene,
    depth: u32,
    points: &mut Vec<DVec3>,
    mut rays: Option<&mut Vec<Ray>>,
) -> DVec3 {
    let mut materials: Vec<&Material> = Vec::new();

    for remaining in (1..=depth).rev() {
        let Intersection { hit, primitive } = match scene.nearest_intersection(&ray) {
            Some(intersection) => intersection,
            None => break,
        };
        points.push(hit.point);

        let direction = reflect(ray.direction.normalize(), hit.normal);
        let reflected = Ray::new(hit.point, direction).with_color(ray.color);
        if let Some(rays) = rays.as_deref_mut() {
            rays.push(reflected);
        }
        trace!("Bounce at {:?} (depth {})", hit.point, remaining);

        materials.push(&primitive.material);
        ray = reflected;
    }

    // Escaped to the background or ran out of bounces
    points.push(ray.point_at_parameter(FAR_DISTANCE));

    materials
        .iter()
        .rev()
        .fold(BACKGROUND.emit, |incoming, material| material.shade(incoming))
}
