use crate::color::Color;
use crate::mesh::normals::vertex_normals;
use crate::mesh::{Mesh, Triangle};
use crate::projector::Projector;
use crate::rasterizer::{draw_triangle_gouraud, Framebuffer};
use crate::scene::Scene;
use crate::shading::shade_vertex;
use crate::transform::ModelPose;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

pub const EPSILON: f32 = 1e-4;

/// Per-render parameters. One value per render pass, passed into each stage
/// rather than living in process-wide state.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub focal_length: f32,
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 720,
            focal_length: 500.0,
            background: Color::BLACK,
        }
    }
}

/// A triangle that survived projection: screen points, shaded vertex colors,
/// and the mean 1/z proxy used only for draw ordering.
struct ProjectedTriangle {
    points: [(i32, i32); 3],
    colors: [Color; 3],
    depth: f32,
}

/// Full pipeline: pose the mesh, estimate smooth normals from the posed
/// vertex table, bake per-triangle attributes, then shade, project, sort and
/// rasterize.
pub fn render(mesh: &Mesh, pose: &ModelPose, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let vertices = pose.apply(&mesh.vertices);
    let normals = vertex_normals(&vertices, &mesh.faces);
    let posed = Mesh::new(vertices, mesh.faces.clone());
    let triangles = posed.bake(&normals);
    render_triangles(&triangles, scene, config)
}

/// Render camera-space triangles. Shading and projection run in parallel per
/// triangle; the composite (sort, then draw) is strictly sequential so the
/// back-to-front order stays observable.
pub fn render_triangles(triangles: &[Triangle], scene: &Scene, config: &RenderConfig) -> Framebuffer {
    println!(
        "Rendering frame ({}x{}) from {} triangles...",
        config.width,
        config.height,
        triangles.len()
    );
    let pb = ProgressBar::new(triangles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} Triangles ({per_sec}) {msg}",
            )
            .unwrap()
            .progress_chars("=>-"),
    );

    let start_time = Instant::now();
    let projector = Projector::new(config);

    let mut projected: Vec<ProjectedTriangle> = triangles
        .par_iter()
        .filter_map(|tri| {
            let result = project_and_shade(tri, &projector, scene);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Shading complete");

    sort_back_to_front(&mut projected);

    let mut fb = Framebuffer::new(config.width, config.height, config.background);
    for tri in &projected {
        draw_triangle_gouraud(&mut fb, tri.points, tri.colors);
    }

    let render_time = start_time.elapsed();
    println!(
        "Rendered {} visible triangles in {:.3} seconds",
        projected.len(),
        render_time.as_secs_f32()
    );

    fb
}

/// Project all three vertices and light them. Any vertex at or behind the
/// near plane drops the whole triangle; there is no clipping.
fn project_and_shade(
    tri: &Triangle,
    projector: &Projector,
    scene: &Scene,
) -> Option<ProjectedTriangle> {
    let p0 = projector.project(tri.positions[0])?;
    let p1 = projector.project(tri.positions[1])?;
    let p2 = projector.project(tri.positions[2])?;

    let mut colors = [Color::BLACK; 3];
    for i in 0..3 {
        colors[i] = shade_vertex(
            tri.positions[i],
            tri.normals[i],
            &scene.material,
            &scene.lights,
            scene.view_pos,
        );
    }

    Some(ProjectedTriangle {
        points: [(p0.x, p0.y), (p1.x, p1.y), (p2.x, p2.y)],
        colors,
        depth: (p0.inv_z + p1.inv_z + p2.inv_z) / 3.0,
    })
}

/// Painter's algorithm ordering: ascending mean 1/z, so farther triangles
/// draw first and nearer ones paint over them. Correct only when triangles
/// do not interpenetrate; that limitation is part of this design.
fn sort_back_to_front(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| {
        a.depth
            .partial_cmp(&b.depth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Save the framebuffer as a timestamped PNG next to the executable.
pub fn save_image(fb: &Framebuffer) {
    println!("Saving image...");
    let img_start_time = Instant::now();

    let mut img_buf =
        image::ImageBuffer::<image::Rgb<u8>, Vec<u8>>::new(fb.width as u32, fb.height as u32);

    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        let c = fb.pixel(x as usize, y as usize);
        *pixel = image::Rgb([c.r as u8, c.g as u8, c.b as u8]);
    }

    let date_str = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let filename = format!("render_{}.png", date_str);

    match img_buf.save(&filename) {
        Ok(_) => {
            let img_save_time = img_start_time.elapsed();
            println!(
                "Image saved as '{}' in {:.3} seconds",
                filename,
                img_save_time.as_secs_f32()
            );
        }
        Err(e) => eprintln!("Error saving image: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::material::{Material, ShadingMode};
    use crate::vec3::Vec3;

    const BG: Color = Color::BLACK;

    fn scene(mode: ShadingMode) -> Scene {
        Scene {
            material: Material::new(
                Color::new(80.0, 130.0, 225.0),
                Color::splat(140.0),
                16.0,
                mode,
            ),
            lights: vec![Light::new(Vec3::ZERO, Color::splat(400.0))],
            view_pos: Vec3::ZERO,
        }
    }

    // Equilateral-footprint triangle facing the camera at z = 3. All three
    // vertices sit at the same x^2 + y^2, so with the light at the origin
    // every vertex sees the same n.l and the shaded face is one flat color.
    fn facing_triangle() -> Triangle {
        let root2 = 2.0f32.sqrt();
        Triangle::new(
            [
                Vec3::new(-1.0, -1.0, 3.0),
                Vec3::new(1.0, -1.0, 3.0),
                Vec3::new(0.0, root2, 3.0),
            ],
            [Vec3::new(0.0, 0.0, -1.0); 3],
        )
    }

    fn expected_facing_color() -> Color {
        // ambient 0.4*kd plus kd * (n.l), n.l = 3/sqrt(11) at every vertex
        let lambert = 3.0 / 11.0f32.sqrt();
        (Color::new(80.0, 130.0, 225.0) * (0.4 + lambert)).clamped()
    }

    fn assert_close(a: Color, b: Color, tol: f32) {
        assert!(
            (a.r - b.r).abs() < tol && (a.g - b.g).abs() < tol && (a.b - b.b).abs() < tol,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn single_lit_triangle_renders_flat_analytic_color() {
        let config = RenderConfig::default();
        let fb = render_triangles(&[facing_triangle()], &scene(ShadingMode::Diffuse), &config);

        // Projected footprint: x in [345, 679], y in [193, 596]. The
        // interior is the analytically shaded color.
        let expected = expected_facing_color();
        assert_close(fb.pixel(512, 327), expected, 0.5);
        assert_close(fb.pixel(512, 250), expected, 0.5);

        // Nothing outside the projected bounds is touched.
        assert_eq!(fb.pixel(0, 0), BG);
        assert_eq!(fb.pixel(340, 327), BG);
        assert_eq!(fb.pixel(512, 600), BG);
        assert_eq!(fb.pixel(1023, 719), BG);
    }

    #[test]
    fn nearer_triangle_paints_over_farther_overlap() {
        let config = RenderConfig::default();
        // Far triangle at z = 6 with zero normals shades ambient-only, so
        // the two triangles are distinguishable wherever they overlap.
        let far = Triangle::new(
            [
                Vec3::new(-3.0, -3.0, 6.0),
                Vec3::new(3.0, -3.0, 6.0),
                Vec3::new(0.0, 3.0, 6.0),
            ],
            [Vec3::ZERO; 3],
        );
        let near = facing_triangle();
        let sc = scene(ShadingMode::Diffuse);

        // Input order deliberately near-first; sorting must fix it.
        let fb = render_triangles(&[near, far], &sc, &config);

        let ambient = (Color::new(80.0, 130.0, 225.0) * 0.4).clamped();
        // Overlap pixel shows the nearer triangle's color.
        assert_close(fb.pixel(512, 327), expected_facing_color(), 0.5);
        // A pixel covered only by the far triangle shows ambient.
        assert_close(fb.pixel(512, 150), ambient, 0.5);
    }

    #[test]
    fn degenerate_triangle_draws_no_pixels() {
        let config = RenderConfig::default();
        let degenerate = Triangle::new(
            [
                Vec3::new(-1.0, -1.0, 3.0),
                Vec3::new(-1.0, -1.0, 3.0),
                Vec3::new(1.0, 1.0, 3.0),
            ],
            [Vec3::new(0.0, 0.0, -1.0); 3],
        );
        let fb = render_triangles(&[degenerate], &scene(ShadingMode::Both), &config);
        for y in (0..720).step_by(7) {
            for x in (0..1024).step_by(7) {
                assert_eq!(fb.pixel(x, y), BG);
            }
        }
    }

    #[test]
    fn triangle_with_vertex_behind_camera_is_dropped_whole() {
        let config = RenderConfig::default();
        let straddling = Triangle::new(
            [
                Vec3::new(-1.0, -1.0, 3.0),
                Vec3::new(1.0, -1.0, 3.0),
                Vec3::new(0.0, 1.0, -2.0),
            ],
            [Vec3::new(0.0, 0.0, -1.0); 3],
        );
        let fb = render_triangles(&[straddling], &scene(ShadingMode::Both), &config);
        for y in (0..720).step_by(7) {
            for x in (0..1024).step_by(7) {
                assert_eq!(fb.pixel(x, y), BG);
            }
        }
    }

    #[test]
    fn full_pipeline_poses_and_renders_a_mesh() {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let pose = ModelPose {
            target_radius: 1.0,
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
            translation: Vec3::new(0.0, 0.0, 4.0),
        };
        let config = RenderConfig::default();
        let fb = render(&mesh, &pose, &scene(ShadingMode::Both), &config);

        let mut covered = 0;
        for y in 0..config.height {
            for x in 0..config.width {
                if fb.pixel(x, y) != BG {
                    covered += 1;
                }
            }
        }
        assert!(covered > 0);
    }
}
