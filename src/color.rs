use std::ops::{Add, Mul};

use serde::Deserialize;

/// RGB color on a 0..255 scale per channel. Shading math runs on f32
/// channels and is clamped once at the end of each computation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn splat(v: f32) -> Color {
        Color::new(v, v, v)
    }

    pub fn clamped(self) -> Color {
        Color::new(
            self.r.clamp(0.0, 255.0),
            self.g.clamp(0.0, 255.0),
            self.b.clamp(0.0, 255.0),
        )
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

pub fn color_to_u32(c: Color) -> u32 {
    let c = c.clamped();
    let r = c.r as u32;
    let g = c.g as u32;
    let b = c.b as u32;
    (r << 16) | (g << 8) | b
}

#[allow(dead_code)]
impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };
    pub const RED: Color = Color {
        r: 255.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 255.0,
        b: 0.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 255.0,
    };
}
