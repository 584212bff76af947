pub mod normals;
pub mod triangle;

use crate::vec3::Vec3;
use std::path::Path;

pub use triangle::Triangle;

/// Raw mesh as handed over by the loader: a shared vertex-position table and
/// faces as index triples into it. Shared-vertex identity is what makes
/// normal averaging possible, so indices are kept as-is until baking.
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    pub fn from_obj(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let load_options = tobj::LoadOptions {
            triangulate: true,
            ..Default::default()
        };
        let (models, _) = tobj::load_obj(Path::new(path), &load_options)?;
        if models.is_empty() {
            return Err(format!("No models found in OBJ file: {}", path).into());
        }

        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let mesh = model.mesh;
            if mesh.indices.is_empty() || mesh.positions.is_empty() {
                println!(
                    "Warning: Model '{}' in '{}' has no indices or positions. Skipping.",
                    model.name, path
                );
                continue;
            }
            if mesh.positions.len() % 3 != 0 {
                return Err(format!(
                    "Invalid position data length in model '{}' in '{}'",
                    model.name, path
                )
                .into());
            }
            if mesh.indices.len() % 3 != 0 {
                return Err(format!(
                    "Invalid index data length in model '{}' in '{}'",
                    model.name, path
                )
                .into());
            }

            let base = vertices.len();
            let model_vertex_count = mesh.positions.len() / 3;
            for i in 0..model_vertex_count {
                let idx = i * 3;
                vertices.push(Vec3::new(
                    mesh.positions[idx],
                    mesh.positions[idx + 1],
                    mesh.positions[idx + 2],
                ));
            }

            for tri in mesh.indices.chunks_exact(3) {
                let v0 = tri[0] as usize;
                let v1 = tri[1] as usize;
                let v2 = tri[2] as usize;

                if v0 >= model_vertex_count || v1 >= model_vertex_count || v2 >= model_vertex_count
                {
                    eprintln!(
                        "Warning: Vertex index out of bounds (max={}) in OBJ file '{}'. Indices: ({}, {}, {}). Skipping triangle.",
                        model_vertex_count.saturating_sub(1),
                        path,
                        v0,
                        v1,
                        v2
                    );
                    continue;
                }

                faces.push([base + v0, base + v1, base + v2]);
            }
        }

        if faces.is_empty() {
            return Err(format!("No triangles loaded from OBJ file: {}", path).into());
        }

        Ok(Self::new(vertices, faces))
    }

    /// Bake shared-vertex data into per-triangle copies: every triangle gets
    /// its own positions and normals, index-for-index.
    ///
    /// `vertex_normals` must be a table parallel to `vertices`, typically
    /// from [`normals::vertex_normals`].
    pub fn bake(&self, vertex_normals: &[Vec3]) -> Vec<Triangle> {
        self.faces
            .iter()
            .map(|face| {
                Triangle::new(
                    [
                        self.vertices[face[0]],
                        self.vertices[face[1]],
                        self.vertices[face[2]],
                    ],
                    [
                        vertex_normals[face[0]],
                        vertex_normals[face[1]],
                        vertex_normals[face[2]],
                    ],
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use normals::vertex_normals;

    #[test]
    fn bake_copies_attributes_index_for_index() {
        let vertices = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices.clone(), vec![[2, 0, 1]]);
        let normals = vertex_normals(&mesh.vertices, &mesh.faces);
        let triangles = mesh.bake(&normals);

        assert_eq!(triangles.len(), 1);
        let tri = &triangles[0];
        assert!((tri.positions[0] - vertices[2]).length() < 1e-6);
        assert!((tri.positions[1] - vertices[0]).length() < 1e-6);
        assert!((tri.positions[2] - vertices[1]).length() < 1e-6);
        for n in &tri.normals {
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }
}
