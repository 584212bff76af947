use crate::color::Color;
use crate::vec3::Vec3;

/// Point light. The position lives in the same (camera) space as the
/// vertices being shaded; intensity carries one value per channel.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
