//! Scenes and rays described in TOML.
//!
//! ```toml
//! max_bounces = 50
//!
//! [[rays]]
//! origin = [100.0, 0.0]
//! towards = [0.0, 0.0]
//! color = [255, 64, 0]
//!
//! [[primitives]]
//! [primitives.Circle]
//! center = [0.0, 0.0]
//! radius = 40.0
//! material = { emit = [1.0, 1.0, 1.0], albedo = [0.0, 0.0, 0.0] }
//! ```

use crate::{
    material::Material,
    primitives::{Circle, OrientedBox, Plane, Primitive},
    ray::WHITE,
    Ray, Scene, SceneError, DEFAULT_MAX_BOUNCES,
};
use glam::{dvec3, DVec3};
use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    #[serde(default = "default_max_bounces")]
    pub max_bounces: u32,
    #[serde(default)]
    pub rays: Vec<RayConfig>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveConfig>,
    pub random: Option<RandomConfig>,
}

/// A ray starting at `origin`, either heading `towards` a point or along `direction`
#[derive(Deserialize, Debug)]
pub struct RayConfig {
    pub origin: [f64; 2],
    pub towards: Option<[f64; 2]>,
    pub direction: Option<[f64; 2]>,
    pub color: Option<[u8; 3]>,
}

#[derive(Deserialize, Debug)]
pub enum PrimitiveConfig {
    Circle {
        center: [f64; 2],
        radius: f64,
        #[serde(default)]
        material: MaterialConfig,
    },
    Plane {
        point: [f64; 2],
        normal: [f64; 2],
        #[serde(default)]
        material: MaterialConfig,
    },
    Box {
        center: [f64; 2],
        width: [f64; 2],
        height: [f64; 2],
        #[serde(default)]
        material: MaterialConfig,
    },
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct MaterialConfig {
    pub emit: [f64; 3],
    pub albedo: [f64; 3],
    pub specularity: f64,
    pub refractive_index: f64,
}

/// Appends a generated scene, see `Scene::random`
#[derive(Deserialize, Debug)]
pub struct RandomConfig {
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_circles")]
    pub circles: usize,
    #[serde(default = "default_planes")]
    pub planes: usize,
}

/// Everything needed to run the traces a config describes
#[derive(Debug)]
pub struct LoadedScene {
    pub scene: Scene,
    pub rays: Vec<Ray>,
    pub max_bounces: u32,
}

fn default_max_bounces() -> u32 {
    DEFAULT_MAX_BOUNCES
}

fn default_circles() -> usize {
    20
}

fn default_planes() -> usize {
    3
}

fn point([x, y]: [f64; 2]) -> DVec3 {
    dvec3(x, y, 0.0)
}

impl Default for MaterialConfig {
    fn default() -> Self {
        // Same as Material::default, a perfect mirror
        Self {
            emit: [0.0, 0.0, 0.0],
            albedo: [1.0, 1.0, 1.0],
            specularity: 1.0,
            refractive_index: 1.0,
        }
    }
}

impl From<MaterialConfig> for Material {
    fn from(config: MaterialConfig) -> Self {
        Self {
            emit: DVec3::from(config.emit),
            albedo: DVec3::from(config.albedo),
            specularity: config.specularity,
            refractive_index: config.refractive_index,
        }
    }
}

impl RayConfig {
    pub fn to_ray(&self) -> Result<Ray, SceneError> {
        let origin = point(self.origin);
        let ray = match (self.towards, self.direction) {
            (Some(towards), None) => Ray::towards(origin, point(towards))?,
            (None, Some(direction)) => Ray::try_new(origin, point(direction))?,
            _ => return Err(SceneError::AmbiguousRay),
        };

        Ok(ray.with_color(self.color.unwrap_or(WHITE)))
    }
}

impl PrimitiveConfig {
    pub fn to_primitive(&self) -> Result<Primitive, SceneError> {
        let primitive = match *self {
            PrimitiveConfig::Circle {
                center,
                radius,
                material,
            } => Primitive::new(Circle::try_new(point(center), radius)?, material.into()),
            PrimitiveConfig::Plane {
                point: at,
                normal,
                material,
            } => Primitive::new(Plane::try_new(point(at), point(normal))?, material.into()),
            PrimitiveConfig::Box {
                center,
                width,
                height,
                material,
            } => Primitive::new(
                OrientedBox::try_new(point(center), point(width), point(height))?,
                material.into(),
            ),
        };

        Ok(primitive)
    }
}

impl SceneConfig {
    pub fn from_toml(source: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the scene and rays, failing on the first invalid entry.
    pub fn load(&self) -> Result<LoadedScene, SceneError> {
        let mut scene = self
            .primitives
            .iter()
            .map(PrimitiveConfig::to_primitive)
            .collect::<Result<Scene, _>>()?;

        if let Some(random) = &self.random {
            let mut rng = Xoshiro256Plus::seed_from_u64(random.seed);
            let generated = Scene::random(
                &mut rng,
                random.width,
                random.height,
                random.circles,
                random.planes,
            )?;
            for primitive in generated.primitives() {
                scene.push(primitive.clone());
            }
        }

        let rays = self
            .rays
            .iter()
            .map(RayConfig::to_ray)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Loaded a scene with {} primitives and {} rays",
            scene.len(),
            rays.len()
        );

        Ok(LoadedScene {
            scene,
            rays,
            max_bounces: self.max_bounces,
        })
    }
}
