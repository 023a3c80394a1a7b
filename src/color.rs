use palette::{Hsl, IntoColor, Srgb};

use crate::rng::SimpleRng;

/// Number of entries in the default chart palette.
pub const PALETTE_SIZE: usize = 8;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Srgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color picker: one random palette entry per chart
// ---------------------------------------------------------------------------

/// Fixed palette plus the random source used to draw from it.
///
/// The palette never changes after construction; only the RNG advances.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Vec<Srgb<u8>>,
    rng: SimpleRng,
}

impl ColorPicker {
    pub fn new(rng: SimpleRng) -> Self {
        ColorPicker {
            palette: generate_palette(PALETTE_SIZE),
            rng,
        }
    }

    /// Reproducible picker for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimpleRng::new(seed))
    }

    pub fn palette(&self) -> &[Srgb<u8>] {
        &self.palette
    }

    /// Uniformly pick a palette entry.
    pub fn pick(&mut self) -> Srgb<u8> {
        let idx = self.rng.below(self.palette.len());
        self.palette[idx]
    }
}
