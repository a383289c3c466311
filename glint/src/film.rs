use crate::math::{Spectrum, BLACK};

use std::path::Path;

/// Rendered pixel values.
#[derive(Debug, Clone)]
pub struct Film {
    res: (u32, u32),
    // Row-major, top row first
    pixels: Vec<Spectrum<f32>>,
}

impl Film {
    /// Creates a black `Film` with the given resolution.
    pub fn new(res: (u32, u32)) -> Self {
        Self {
            res,
            pixels: vec![BLACK; (res.0 as usize) * (res.1 as usize)],
        }
    }

    /// Creates a new `Film` from pixel rows, all rows need to be the same length.
    pub fn from_rows(rows: Vec<Vec<Spectrum<f32>>>) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        debug_assert!(rows.iter().all(|r| r.len() == width as usize));
        Self {
            res: (width, height),
            pixels: rows.into_iter().flatten().collect(),
        }
    }

    pub fn res(&self) -> (u32, u32) {
        self.res
    }

    pub fn pixels(&self) -> &[Spectrum<f32>] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Spectrum<f32> {
        self.pixels[(y as usize) * (self.res.0 as usize) + (x as usize)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, value: Spectrum<f32>) {
        let i = (y as usize) * (self.res.0 as usize) + (x as usize);
        self.pixels[i] = value;
    }

    /// Returns the pixels as 8bit RGB, clamping values to [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| {
                let c = p.clamped(0.0, 1.0);
                [c.r, c.g, c.b].map(|v| (v * 255.0).round() as u8)
            })
            .collect()
    }

    /// Writes the `Film` into a png file.
    pub fn write_png(&self, path: &Path) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgb8(),
            self.res.0,
            self.res.1,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;

        glint_info!("Wrote {}x{} film into '{}'", self.res.0, self.res.1, path.display());

        Ok(())
    }
}
