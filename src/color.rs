use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

fn default_alpha() -> u8 {
    255
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const GRAY: Rgba = Rgba::rgb(160, 160, 164);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque color from the low 24 bits of `value` laid out as `0xRRGGBB`.
    /// The top byte is ignored.
    pub const fn from_rgb_u32(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Luminance-preserving gray level of this color.
    pub fn luma(self) -> u8 {
        let weighted = self.r as u32 * 11 + self.g as u32 * 16 + self.b as u32 * 5;
        (weighted / 32) as u8
    }

    /// Opaque gray with the same luminance, used when painting disabled sliders.
    pub fn gray(self) -> Self {
        let l = self.luma();
        Self::rgb(l, l, l)
    }
}

impl From<Rgba> for egui::Color32 {
    fn from(color: Rgba) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Supplies colors for handles added without an explicit one.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgba;
}

/// Pseudo-random opaque colors.
pub struct ColorGenerator {
    rng: StdRng,
}

impl ColorGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ColorSource for ColorGenerator {
    fn next_color(&mut self) -> Rgba {
        Rgba::from_rgb_u32(self.rng.gen::<u32>())
    }
}
