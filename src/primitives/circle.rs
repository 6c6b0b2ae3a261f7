use crate::{error::SceneError, ray::is_finite, Hit, Hits, Intersect, Ray};
use glam::DVec3;
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec3,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn try_new(center: DVec3, radius: f64) -> Result<Self, SceneError> {
        if !is_finite(center) || !radius.is_finite() {
            return Err(SceneError::NonFinite("circle"));
        }
        if radius < 0.0 {
            return Err(SceneError::NegativeRadius(radius));
        }

        Ok(Self::new(center, radius))
    }

    fn hit(&self, ray: &Ray, t: f64) -> Hit {
        let point = ray.point_at_parameter(t);
        let outward = point - self.center;

        // A zero radius circle is hit exactly at its center, face the ray instead
        let normal = if outward.length_squared() > 0.0 {
            outward.normalize()
        } else {
            -ray.direction
        };

        Hit { t, point, normal }
    }
}

impl Intersect for Circle {
    // Solves |o + t*d - c|^2 = r^2 for t, with d of unit length
    fn intersect(&self, ray: &Ray) -> Hits {
        let oc = ray.origin - self.center;
        let b = ray.direction.dot(oc);
        let discriminant = b * b - oc.length_squared() + self.radius * self.radius;

        if discriminant < 0.0 {
            Hits::new()
        } else if discriminant == 0.0 {
            smallvec![self.hit(ray, -b)]
        } else {
            let root = discriminant.sqrt();
            smallvec![self.hit(ray, -b - root), self.hit(ray, -b + root)]
        }
    }
}
