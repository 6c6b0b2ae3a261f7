//! This module is full of shapes that all impl Intersect

mod circle;
mod oriented_box;
mod plane;

pub use circle::*;
pub use oriented_box::*;
pub use plane::*;

use crate::{
    material::Material,
    ray::{Hit, Ray},
};
use enum_dispatch::enum_dispatch;
use smallvec::SmallVec;

/// Candidate hits of a single shape, never more than two
pub type Hits = SmallVec<[Hit; 2]>;

/// Computes where a ray intersects a shape
#[enum_dispatch]
pub trait Intersect {
    /// Every candidate hit along the whole line of the ray, ordered by `t`.
    /// Hits behind the origin are included, filtering them is up to the caller.
    fn intersect(&self, ray: &Ray) -> Hits;
}

/// The closed set of shapes a scene can be built from
#[enum_dispatch(Intersect)]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle,
    Plane,
    OrientedBox,
}

/// A shape together with the material covering it
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }
}

impl Intersect for Primitive {
    fn intersect(&self, ray: &Ray) -> Hits {
        self.shape.intersect(ray)
    }
}
