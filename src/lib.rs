//! A 2D ray tracer that follows mirror reflections through a scene of circles, planes and
//! boxes, composing the color each surface contributes along the way.

pub mod config;
pub mod error;
pub mod material;
pub mod optics;
pub mod primitives;
pub mod ray;
pub mod scene;
pub mod tracer;

pub use crate::{
    error::SceneError,
    material::Material,
    primitives::*,
    ray::{Hit, Ray},
    scene::{Intersection, Scene},
    tracer::{shoot_ray, trace_path, trace_path_recording, Path},
};

/// Hits closer to the ray origin than this are ignored
pub const EPSILON: f64 = 1e-4;

/// Parametric distance standing in for "the ray escapes to infinity"
pub const FAR_DISTANCE: f64 = 5000.0;

pub const DEFAULT_MAX_BOUNCES: u32 = 50;
