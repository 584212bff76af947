use crate::vec3::Vec3;

/// A render-ready triangle: per-vertex copies of position and unit normal,
/// index-correspondent. No shared topology survives baking.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub positions: [Vec3; 3],
    pub normals: [Vec3; 3],
}

impl Triangle {
    pub fn new(positions: [Vec3; 3], normals: [Vec3; 3]) -> Self {
        Self { positions, normals }
    }
}
