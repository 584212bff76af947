//! Per-vertex normal estimation from shared-vertex topology.

use crate::vec3::Vec3;

/// Flat normal of a face: normalized cross product of its edge vectors.
/// Collinear vertices yield the zero vector; callers treat that as "no
/// lighting contribution".
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalized()
}

/// Smooth per-vertex normals: for each shared vertex index, the arithmetic
/// mean of the adjacent face normals (not area-weighted), renormalized.
///
/// Accumulation runs over an arena indexed by vertex id and is finalized
/// here; the returned table is read-only thereafter. A vertex whose adjacent
/// normals cancel out (or that no face references) keeps the zero vector.
pub fn vertex_normals(vertices: &[Vec3], faces: &[[usize; 3]]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; vertices.len()];
    let mut counts = vec![0u32; vertices.len()];

    for face in faces {
        let normal = face_normal(
            vertices[face[0]],
            vertices[face[1]],
            vertices[face[2]],
        );
        for &idx in face {
            sums[idx] = sums[idx] + normal;
            counts[idx] += 1;
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            if count == 0 {
                Vec3::ZERO
            } else {
                (sum * (1.0 / count as f32)).normalized()
            }
        })
        .collect()
}
