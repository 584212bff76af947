//! Framebuffer and edge-function triangle fill with Gouraud interpolation.

use crate::color::{color_to_u32, Color};

/// Output pixel grid for software rendering. Writes outside the bounds are
/// silently dropped.
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.clamped(); width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color.clamped();
        }
    }

    /// Pack into the 0RGB u32 layout the preview window expects.
    pub fn to_argb_buffer(&self) -> Vec<u32> {
        self.pixels.iter().map(|c| color_to_u32(*c)).collect()
    }
}

/// Signed edge function: positive when (px, py) lies to one fixed side of
/// the directed line from (x0, y0) to (x1, y1). Applied to the third vertex
/// it gives twice the triangle's signed area.
pub fn edge_function(x0: i64, y0: i64, x1: i64, y1: i64, px: i64, py: i64) -> i64 {
    (y0 - y1) * px + (x1 - x0) * py + (x0 * y1 - x1 * y0)
}

/// Fill a screen-space triangle, interpolating the three vertex colors with
/// barycentric weights (Gouraud shading).
///
/// Pixels are covered when all three edge values are >= 0, which assumes the
/// caller supplies vertices in the pipeline's consistent winding. A triangle
/// with exactly zero area is skipped outright.
pub fn draw_triangle_gouraud(fb: &mut Framebuffer, pts: [(i32, i32); 3], cols: [Color; 3]) {
    let (x0, y0) = (pts[0].0 as i64, pts[0].1 as i64);
    let (x1, y1) = (pts[1].0 as i64, pts[1].1 as i64);
    let (x2, y2) = (pts[2].0 as i64, pts[2].1 as i64);

    let area = edge_function(x0, y0, x1, y1, x2, y2);
    if area == 0 {
        return;
    }
    let inv_area = 1.0 / area as f32;

    let min_x = x0.min(x1).min(x2).max(0);
    let max_x = x0.max(x1).max(x2).min(fb.width as i64 - 1);
    let min_y = y0.min(y1).min(y2).max(0);
    let max_y = y0.max(y1).max(y2).min(fb.height as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let w0 = edge_function(x1, y1, x2, y2, x, y);
            let w1 = edge_function(x2, y2, x0, y0, x, y);
            let w2 = edge_function(x0, y0, x1, y1, x, y);

            if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                let w0 = w0 as f32 * inv_area;
                let w1 = w1 as f32 * inv_area;
                let w2 = w2 as f32 * inv_area;

                let color = cols[0] * w0 + cols[1] * w1 + cols[2] * w2;
                fb.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}
