use crate::color::Color;
use crate::light::Light;
use crate::material::Material;
use crate::renderer::EPSILON;
use crate::vec3::Vec3;

const AMBIENT_FACTOR: f32 = 0.4;

/// Mirror `incoming` about the unit normal: r = 2n(n.l) - l.
fn reflect(incoming: Vec3, normal: Vec3) -> Vec3 {
    normal * (2.0 * normal.dot(incoming)) - incoming
}

/// Phong contribution of a single light at a shaded point.
///
/// `light_dir` and `view_dir` are unit vectors from the point toward the
/// light and toward the viewer.
fn phong(position: Vec3, normal: Vec3, material: &Material, light: &Light, view_pos: Vec3) -> Color {
    let light_dir = (light.position - position).normalized();
    let view_dir = (view_pos - position).normalized();
    let reflect_dir = reflect(light_dir, normal).normalized();

    let mut color = Color::BLACK;

    if material.mode.has_diffuse() {
        let lambert = normal.dot(light_dir).max(0.0);
        color = color + material.diffuse * lambert;
    }

    if material.mode.has_specular() {
        let highlight = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess);
        color = color + material.specular * highlight;
    }

    color
}

/// Evaluate the full illumination model at one vertex: ambient once, plus
/// the summed diffuse/specular contribution of every light, clamped to the
/// displayable range.
///
/// A zero normal (degenerate geometry) contributes no directional light and
/// shades as ambient only.
pub fn shade_vertex(
    position: Vec3,
    normal: Vec3,
    material: &Material,
    lights: &[Light],
    view_pos: Vec3,
) -> Color {
    let ambient = material.diffuse * AMBIENT_FACTOR;

    if normal.length_squared() < EPSILON {
        return ambient.clamped();
    }

    let mut color = ambient;
    for light in lights {
        color = color + phong(position, normal, material, light, view_pos);
    }
    color.clamped()
}
