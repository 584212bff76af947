use crate::color::Color;
use crate::light::Light;
use crate::material::{Material, ShadingMode};
use crate::renderer::RenderConfig;
use crate::transform::ModelPose;
use crate::vec3::Vec3;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Everything the pipeline shades against: one material shared by all
/// triangles, the light set, and the view origin.
pub struct Scene {
    pub material: Material,
    pub lights: Vec<Light>,
    pub view_pos: Vec3,
}

/// Scene + render parameters + model pose, as loaded from a JSON scene file
/// or from the built-in defaults.
pub struct RenderSetup {
    pub scene: Scene,
    pub config: RenderConfig,
    pub pose: ModelPose,
}

#[derive(Deserialize, Debug, Copy, Clone, Default)]
pub struct Vec3Config {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3Config> for Vec3 {
    fn from(v_conf: Vec3Config) -> Self {
        Vec3::new(v_conf.x, v_conf.y, v_conf.z)
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ColorConfig(f32, f32, f32);

impl From<ColorConfig> for Color {
    fn from(c_conf: ColorConfig) -> Self {
        Color::new(c_conf.0, c_conf.1, c_conf.2)
    }
}

#[derive(Deserialize, Debug)]
pub struct MaterialConfig {
    pub diffuse: ColorConfig,
    pub specular: ColorConfig,
    pub shininess: f32,
    pub mode: Option<ShadingMode>,
}

#[derive(Deserialize, Debug)]
pub struct LightConfig {
    pub position: Vec3Config,
    pub intensity: ColorConfig,
}

#[derive(Deserialize, Debug)]
pub struct PoseConfig {
    pub target_radius: Option<f32>,
    pub yaw_degrees: Option<f32>,
    pub pitch_degrees: Option<f32>,
    pub translation: Option<Vec3Config>,
}

#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub resolution: Option<[usize; 2]>,
    pub focal_length: Option<f32>,
    pub background: Option<ColorConfig>,
    pub view_pos: Option<Vec3Config>,
    pub model: Option<PoseConfig>,
    pub material: MaterialConfig,
    pub lights: Vec<LightConfig>,
}

impl RenderSetup {
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        let parsed: SceneConfig = serde_json::from_str(&text)?;
        Ok(Self::from_config(parsed))
    }

    fn from_config(conf: SceneConfig) -> Self {
        let defaults = RenderConfig::default();
        let [width, height] = conf
            .resolution
            .unwrap_or([defaults.width, defaults.height]);
        let config = RenderConfig {
            width,
            height,
            focal_length: conf.focal_length.unwrap_or(defaults.focal_length),
            background: conf
                .background
                .map(Color::from)
                .unwrap_or(defaults.background),
        };

        let default_pose = ModelPose::default();
        let pose = match conf.model {
            Some(p) => ModelPose {
                target_radius: p.target_radius.unwrap_or(default_pose.target_radius),
                yaw_degrees: p.yaw_degrees.unwrap_or(default_pose.yaw_degrees),
                pitch_degrees: p.pitch_degrees.unwrap_or(default_pose.pitch_degrees),
                translation: p
                    .translation
                    .map(Vec3::from)
                    .unwrap_or(default_pose.translation),
            },
            None => default_pose,
        };

        let material = Material::new(
            conf.material.diffuse.into(),
            conf.material.specular.into(),
            conf.material.shininess,
            conf.material.mode.unwrap_or(ShadingMode::Both),
        );

        let lights = conf
            .lights
            .iter()
            .map(|l| Light::new(l.position.into(), l.intensity.into()))
            .collect();

        RenderSetup {
            scene: Scene {
                material,
                lights,
                view_pos: conf.view_pos.map(Vec3::from).unwrap_or(Vec3::ZERO),
            },
            config,
            pose,
        }
    }
}

impl Default for RenderSetup {
    /// The built-in demo setup: the original bunny-style constants.
    fn default() -> Self {
        RenderSetup {
            scene: Scene {
                material: Material::new(
                    Color::new(80.0, 130.0, 225.0),
                    Color::splat(140.0),
                    16.0,
                    ShadingMode::Both,
                ),
                lights: vec![
                    Light::new(Vec3::new(0.0, 2.0, 5.0), Color::splat(400.0)),
                    Light::new(Vec3::new(0.0, -2.0, 5.0), Color::splat(200.0)),
                ],
                view_pos: Vec3::ZERO,
            },
            config: RenderConfig::default(),
            pose: ModelPose::default(),
        }
    }
}
