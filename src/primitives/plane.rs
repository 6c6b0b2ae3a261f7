use crate::{error::SceneError, ray::is_finite, Hit, Hits, Intersect, Ray, FAR_DISTANCE};
use glam::{dvec3, DVec3};
use smallvec::smallvec;

/// An infinite line through `point`, facing `normal`
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub point: DVec3,
    pub normal: DVec3,
}

impl Plane {
    /// The normal is normalized on construction.
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    pub fn try_new(point: DVec3, normal: DVec3) -> Result<Self, SceneError> {
        if !is_finite(point) || !is_finite(normal) {
            return Err(SceneError::NonFinite("plane"));
        }
        if normal.length_squared() == 0.0 {
            return Err(SceneError::ZeroNormal);
        }

        Ok(Self::new(point, normal))
    }

    /// Two far away endpoints of the drawable segment of the line, for visualization only.
    pub fn line(&self) -> [DVec3; 2] {
        let n = self.normal;
        let left = dvec3(n.y, -n.x, n.z);
        let right = dvec3(-n.y, n.x, n.z);

        [
            self.point + left * FAR_DISTANCE,
            self.point + right * FAR_DISTANCE,
        ]
    }
}

impl Intersect for Plane {
    // t = (p - o).n / d.n
    fn intersect(&self, ray: &Ray) -> Hits {
        let denominator = ray.direction.dot(self.normal);

        if denominator == 0.0 {
            return Hits::new();
        }

        let t = (self.point - ray.origin).dot(self.normal) / denominator;

        smallvec![Hit {
            t,
            point: ray.point_at_parameter(t),
            normal: self.normal,
        }]
    }
}
