use crate::error::SceneError;
use glam::DVec3;
use log::warn;

/// Display color given to rays that are not tagged with one
pub const WHITE: [u8; 3] = [255, 255, 255];

/// The ray data type
///
/// The direction is unit length. A ray is never changed after it has been built, every
/// bounce spawns a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
    /// Tag used when drawing the ray, not part of the light computation
    pub color: [u8; 3],
}

impl Ray {
    /// Builds a ray, normalizing the direction unless it already is unit length.
    ///
    /// A zero direction is kept as is and the ray goes nowhere. Use `try_new` to reject it.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        let length_squared = direction.length_squared();
        let direction = if length_squared == 1.0 {
            direction
        } else if length_squared == 0.0 {
            warn!("Ray at {:?} was given a zero length direction", origin);
            direction
        } else {
            direction.normalize()
        };

        Self {
            origin,
            direction,
            color: WHITE,
        }
    }

    /// Like `new`, but rejects directions that can not be normalized.
    pub fn try_new(origin: DVec3, direction: DVec3) -> Result<Self, SceneError> {
        if !is_finite(origin) || !is_finite(direction) {
            return Err(SceneError::NonFinite("ray"));
        }
        if direction.length_squared() == 0.0 {
            return Err(SceneError::ZeroDirection);
        }

        Ok(Self::new(origin, direction))
    }

    /// The ray a drag gesture describes: starts at `from` and heads for `to`.
    pub fn towards(from: DVec3, to: DVec3) -> Result<Self, SceneError> {
        Self::try_new(from, to - from)
    }

    pub fn with_color(self, color: [u8; 3]) -> Self {
        Self { color, ..self }
    }

    pub fn point_at_parameter(&self, t: f64) -> DVec3 {
        self.origin + t * self.direction
    }
}

/// Contains data to be used in the generation of a new ray as a result of an intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub point: DVec3,
    /// Unit length surface normal at `point`
    pub normal: DVec3,
}

pub(crate) fn is_finite(v: DVec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
