mod color;
mod light;
mod material;
mod mesh;
mod projector;
mod rasterizer;
mod renderer;
mod scene;
mod shading;
mod transform;
mod vec3;

use minifb::{Key, Window, WindowOptions};

use crate::mesh::Mesh;
use crate::renderer::{render, save_image};
use crate::scene::RenderSetup;

fn main() {
    let mut args = std::env::args().skip(1);
    let obj_path = args.next().unwrap_or_else(|| "bunny.obj".to_string());
    let scene_path = args.next();

    let setup = match scene_path {
        Some(path) => RenderSetup::from_json(&path)
            .unwrap_or_else(|e| panic!("Failed to load scene '{}': {}", path, e)),
        None => RenderSetup::default(),
    };

    let mut window = Window::new(
        "Rasterizer - ESC to exit",
        setup.config.width,
        setup.config.height,
        WindowOptions::default(),
    )
    .unwrap_or_else(|e| panic!("Unable to create window: {}", e));

    println!("Loading mesh '{}'...", obj_path);
    let mesh = Mesh::from_obj(&obj_path)
        .unwrap_or_else(|e| panic!("Failed to load mesh '{}': {}", obj_path, e));
    println!(
        "Mesh loaded: {} vertices, {} triangles.",
        mesh.vertices.len(),
        mesh.faces.len()
    );

    let fb = render(&mesh, &setup.pose, &setup.scene, &setup.config);

    save_image(&fb);

    let buffer = fb.to_argb_buffer();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, setup.config.width, setup.config.height)
            .unwrap_or_else(|e| {
                eprintln!("Failed to update window buffer: {}", e);
            });
    }

    println!("Exiting.");
}
