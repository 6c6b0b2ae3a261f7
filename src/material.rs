use glam::{dvec3, DVec3};
use lazy_static::lazy_static;

lazy_static! {
    /// What a ray sees when it escapes the scene or runs out of bounces
    pub static ref BACKGROUND: Material = Material::white_emitter();
}

/// Surface properties of a primitive
///
/// Colors are vectors with channels nominally in [0, 1]. Nothing clamps them, a chain of
/// emitters can push a channel above one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Light added regardless of what comes in
    pub emit: DVec3,
    /// Per channel attenuation of incoming light
    pub albedo: DVec3,
    /// Share of mirror reflection, every surface is fully specular for now
    pub specularity: f64,
    pub refractive_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emit: DVec3::zero(),
            albedo: DVec3::one(),
            specularity: 1.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    pub fn new(albedo: DVec3) -> Self {
        Self {
            albedo,
            ..Self::default()
        }
    }

    /// A material tinted by an 8 bit display color
    pub fn from_color(color: [u8; 3]) -> Self {
        Self::new(from_display_color(color))
    }

    /// A pure light source, it reflects nothing
    pub fn emitter(emit: DVec3) -> Self {
        Self {
            emit,
            albedo: DVec3::zero(),
            ..Self::default()
        }
    }

    pub fn white_emitter() -> Self {
        Self::emitter(DVec3::one())
    }

    /// The rendering step: `emit + albedo * incoming`, per channel.
    pub fn shade(&self, incoming: DVec3) -> DVec3 {
        self.emit + self.albedo * incoming
    }
}

/// Scales a color vector to the nearest 8 bit channels, values outside [0, 1] saturate.
pub fn to_display_color(color: DVec3) -> [u8; 3] {
    [
        (255.0 * color.x).round() as u8,
        (255.0 * color.y).round() as u8,
        (255.0 * color.z).round() as u8,
    ]
}

pub fn from_display_color([r, g, b]: [u8; 3]) -> DVec3 {
    dvec3(f64::from(r), f64::from(g), f64::from(b)) / 255.0
}
