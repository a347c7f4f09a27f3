use std::path::Path;

use image::{Rgb, RgbImage};

/// An RGB drawing surface backed by an `image` buffer.
///
/// All placeholder art is composed on a `Canvas` and then saved through the
/// `image` crate, which picks the encoder from the file extension.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a canvas of the given size, filled with a background color.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        let mut img = RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = background;
        }
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Blend `color` onto the pixel at (x, y) with the given coverage,
    /// where 0 leaves the pixel untouched and 255 replaces it.
    ///
    /// Out-of-bounds coordinates are ignored so glyphs that poke past the
    /// canvas edge clip instead of panicking.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: u8) {
        if x < 0 || y < 0 || x >= self.img.width() as i32 || y >= self.img.height() as i32 {
            return;
        }
        if coverage == 0 {
            return;
        }
        let alpha = coverage as u16;
        let pixel = self.img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let bg = pixel.0[c] as u16;
            let fg = color.0[c] as u16;
            pixel.0[c] = ((fg * alpha + bg * (255 - alpha)) / 255) as u8;
        }
    }

    /// Fill a centered disc, leaving `margin` pixels of background on each side.
    pub fn fill_disc(&mut self, margin: u32, color: Rgb<u8>) {
        let w = self.img.width() as f32;
        let h = self.img.height() as f32;
        let cx = w / 2.0;
        let cy = h / 2.0;
        let radius = (w.min(h) / 2.0 - margin as f32).max(0.0);
        let r2 = radius * radius;
        for y in 0..self.img.height() {
            for x in 0..self.img.width() {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.img.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Encode the canvas to `path`. The format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<(), image::ImageError> {
        self.img.save(path)
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }
}
