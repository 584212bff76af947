use crate::vec3::Vec3;

/// Canonical camera-facing pose for a model: recenter on the centroid,
/// scale the bounding radius to `target_radius`, yaw, pitch, then translate
/// in front of the camera. One value per render, no process-wide state.
#[derive(Clone, Copy, Debug)]
pub struct ModelPose {
    pub target_radius: f32,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub translation: Vec3,
}

impl Default for ModelPose {
    fn default() -> Self {
        Self {
            target_radius: 1.5,
            yaw_degrees: -130.0,
            pitch_degrees: 180.0,
            translation: Vec3::new(0.0, -0.5, 5.0),
        }
    }
}

impl ModelPose {
    /// Apply the pose to a vertex table, producing a new table.
    ///
    /// A degenerate single-point model has bounding radius zero; scaling is
    /// skipped rather than dividing by zero.
    pub fn apply(&self, vertices: &[Vec3]) -> Vec<Vec3> {
        if vertices.is_empty() {
            return Vec::new();
        }

        let mut centroid = Vec3::ZERO;
        for v in vertices {
            centroid = centroid + *v;
        }
        centroid = centroid * (1.0 / vertices.len() as f32);

        let radius = vertices
            .iter()
            .map(|v| (*v - centroid).length())
            .fold(0.0f32, f32::max);

        let scale = if radius > 0.0 {
            self.target_radius / radius
        } else {
            1.0
        };

        vertices
            .iter()
            .map(|v| {
                ((*v - centroid) * scale)
                    .rotate_around_y(self.yaw_degrees)
                    .rotate_around_x(self.pitch_degrees)
                    + self.translation
            })
            .collect()
    }
}
