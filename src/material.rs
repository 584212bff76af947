use crate::color::Color;
use serde::Deserialize;

/// Which Phong terms a material contributes beyond ambient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    Diffuse,
    Specular,
    Both,
}

impl ShadingMode {
    pub fn has_diffuse(self) -> bool {
        matches!(self, ShadingMode::Diffuse | ShadingMode::Both)
    }

    pub fn has_specular(self) -> bool {
        matches!(self, ShadingMode::Specular | ShadingMode::Both)
    }
}

/// Surface material, owned by the scene and shared by every shading call.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    pub mode: ShadingMode,
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, shininess: f32, mode: ShadingMode) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
            mode,
        }
    }
}
