use crate::{
    error::SceneError,
    material::Material,
    primitives::{Circle, Intersect, Plane, Primitive},
    Hit, Ray, EPSILON,
};
use glam::{dvec3, DVec3};
use log::debug;
use rand::{distributions::Uniform, Rng};
use rand_distr::{Distribution, UnitCircle};

/// An ordered collection of primitives. Read-only while tracing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

/// The nearest hit of a ray in a scene and the primitive it landed on
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub hit: Hit,
    pub primitive: &'a Primitive,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Finds the hit with the smallest `t` above `EPSILON` over every primitive.
    ///
    /// Hits at or below `EPSILON` are dropped so a ray leaving a surface does not hit that
    /// surface again right at its origin. On equal `t` the primitive earlier in the scene wins.
    /// A ray without a direction hits nothing.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        if ray.direction.length_squared() == 0.0 {
            return None;
        }

        let mut nearest: Option<Intersection> = None;

        for primitive in &self.primitives {
            for hit in primitive.intersect(ray) {
                if hit.t <= EPSILON {
                    continue;
                }
                if nearest.map_or(true, |nearest| hit.t < nearest.hit.t) {
                    nearest = Some(Intersection { hit, primitive });
                }
            }
        }

        nearest
    }

    /// Generates a scene spread over a `width` by `height` area centered on the origin.
    ///
    /// There is always a circle of radius 40 at the origin, followed by `circles` random
    /// circles and `planes` random planes, all with the default material. Bounds that are not
    /// finite and positive are rejected.
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        circles: usize,
        planes: usize,
    ) -> Result<Self, SceneError> {
        let valid = |extent: f64| extent.is_finite() && extent > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidBounds { width, height });
        }

        let (w, h) = (width / 2.0, height / 2.0);
        let x = Uniform::new_inclusive(-w, w);
        let y = Uniform::new_inclusive(-h, h);
        let radius = Uniform::new(10.0, 100.0);

        let mut scene = Self::new();
        scene.push(Primitive::new(
            Circle::new(DVec3::zero(), 40.0),
            Material::default(),
        ));

        for _ in 0..circles {
            let center = dvec3(x.sample(rng), y.sample(rng), 0.0);
            let circle = Circle::new(center, radius.sample(rng));
            scene.push(Primitive::new(circle, Material::default()));
        }

        for _ in 0..planes {
            let point = dvec3(x.sample(rng), y.sample(rng), 0.0);
            let [nx, ny]: [f64; 2] = UnitCircle.sample(rng);
            let plane = Plane::new(point, dvec3(nx, ny, 0.0));
            scene.push(Primitive::new(plane, Material::default()));
        }

        debug!(
            "Generated a random scene with {} primitives over {}x{}",
            scene.len(),
            width,
            height
        );

        Ok(scene)
    }
}

impl From<Vec<Primitive>> for Scene {
    fn from(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}
