use crate::{error::SceneError, ray::is_finite, Hit, Hits, Intersect, Plane, Ray, EPSILON};
use glam::DVec3;

/// A box spanned by three half-axis vectors around its center.
///
/// The axes do not have to line up with the world axes. In 2D the third axis is left at zero
/// and only takes part in bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientedBox {
    pub center: DVec3,
    pub width: DVec3,
    pub height: DVec3,
    pub depth: DVec3,
}

impl OrientedBox {
    /// A flat box, the third axis is zero.
    pub fn new(center: DVec3, width: DVec3, height: DVec3) -> Self {
        Self {
            center,
            width,
            height,
            depth: DVec3::zero(),
        }
    }

    pub fn try_new(center: DVec3, width: DVec3, height: DVec3) -> Result<Self, SceneError> {
        if !is_finite(center) || !is_finite(width) || !is_finite(height) {
            return Err(SceneError::NonFinite("box"));
        }
        if width.length_squared() == 0.0 {
            return Err(SceneError::DegenerateAxis("width"));
        }
        if height.length_squared() == 0.0 {
            return Err(SceneError::DegenerateAxis("height"));
        }

        Ok(Self::new(center, width, height))
    }

    pub fn with_depth(self, depth: DVec3) -> Self {
        Self { depth, ..self }
    }

    fn axes(&self) -> impl Iterator<Item = DVec3> {
        // Zero axes have no faces and do not constrain containment
        let axes = [self.width, self.height, self.depth];
        axes.into_iter().filter(|axis| axis.length_squared() > 0.0)
    }

    /// Whether `point` is inside or on the box, with an epsilon of slack on every axis
    pub fn contains(&self, point: DVec3) -> bool {
        let local = point - self.center;

        self.axes()
            .all(|axis| (local.dot(axis) / axis.length_squared()).abs() <= 1.0 + EPSILON)
    }

    /// The plane of every face, facing outwards
    fn faces(&self) -> impl Iterator<Item = Plane> + '_ {
        self.axes().flat_map(move |axis| {
            let center = self.center;
            [axis, -axis].into_iter().map(move |side| Plane::new(center + side, side))
        })
    }
}

impl Intersect for OrientedBox {
    fn intersect(&self, ray: &Ray) -> Hits {
        let mut nearest: Option<Hit> = None;

        for face in self.faces() {
            for hit in face.intersect(ray) {
                if hit.t <= EPSILON || !self.contains(hit.point) {
                    continue;
                }
                if nearest.map_or(true, |nearest| hit.t < nearest.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest.into_iter().collect()
    }
}
