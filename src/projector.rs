use crate::renderer::RenderConfig;
use crate::vec3::Vec3;

/// Points at or closer than this z are behind or grazing the camera plane
/// and cannot be projected.
pub const NEAR_EPSILON: f32 = 1e-3;

/// A camera-space point mapped onto the screen, plus the 1/z proxy used for
/// depth ordering (larger means closer).
#[derive(Clone, Copy, Debug)]
pub struct ProjectedVertex {
    pub x: i32,
    pub y: i32,
    pub inv_z: f32,
}

/// Pinhole projection with a fixed focal length and the image center as
/// principal point.
pub struct Projector {
    focal_length: f32,
    half_width: f32,
    half_height: f32,
}

impl Projector {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            focal_length: config.focal_length,
            half_width: config.width as f32 / 2.0,
            half_height: config.height as f32 / 2.0,
        }
    }

    /// Returns `None` for points at or behind the near-plane epsilon; any
    /// triangle referencing such a point is dropped whole by the caller.
    pub fn project(&self, p: Vec3) -> Option<ProjectedVertex> {
        if p.z <= NEAR_EPSILON {
            return None;
        }
        Some(ProjectedVertex {
            x: ((p.x / p.z) * self.focal_length + self.half_width).round() as i32,
            y: ((p.y / p.z) * self.focal_length + self.half_height).round() as i32,
            inv_z: 1.0 / p.z,
        })
    }
}
