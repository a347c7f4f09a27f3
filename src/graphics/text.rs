//! Text rendering on top of fontdue.
//!
//! Placeholder labels are laid out with fontdue's layout engine (which
//! understands embedded `\n` line breaks) and the resulting glyph coverage
//! bitmaps are alpha-blended onto the canvas.
//!
//! Font discovery is a fall-through chain: configured paths first, then a
//! handful of well-known system font locations. A missing font is never
//! fatal to the caller - `Font::locate` just returns `None`.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::layout::{
    CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle as LayoutStyle,
    VerticalAlign,
};
use image::Rgb;

use super::canvas::Canvas;

/// Errors that can occur when loading a font file.
#[derive(Debug)]
pub enum FontError {
    /// IO error reading the font file.
    Io(std::io::Error),
    /// fontdue rejected the font data.
    Parse(&'static str),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::Io(e) => write!(f, "Font IO error: {}", e),
            FontError::Parse(msg) => write!(f, "Font parse error: {}", msg),
        }
    }
}

impl std::error::Error for FontError {}

impl From<std::io::Error> for FontError {
    fn from(e: std::io::Error) -> Self {
        FontError::Io(e)
    }
}

/// Well-known font locations tried after any configured paths.
pub fn system_font_candidates() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// A loaded TTF/OTF font.
pub struct Font {
    inner: fontdue::Font,
}

impl Font {
    /// Load a font from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path)?;
        let inner = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(FontError::Parse)?;
        Ok(Self { inner })
    }

    /// Try each candidate path in order and return the first font that loads.
    ///
    /// Failures along the chain are logged at debug level and otherwise
    /// swallowed; `None` means the whole chain was exhausted.
    pub fn locate(candidates: &[PathBuf]) -> Option<Self> {
        for path in candidates {
            match Self::from_file(path) {
                Ok(font) => {
                    log::debug!("loaded font from {}", path.display());
                    return Some(font);
                }
                Err(e) => log::debug!("font candidate {} rejected: {}", path.display(), e),
            }
        }
        None
    }

    /// Draw `text` centered both horizontally and vertically on the canvas.
    /// Embedded `\n` characters start new lines.
    pub fn draw_centered(&self, canvas: &mut Canvas, text: &str, size: f32, color: Rgb<u8>) {
        let settings = LayoutSettings {
            max_width: Some(canvas.width() as f32),
            max_height: Some(canvas.height() as f32),
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            ..LayoutSettings::default()
        };
        self.draw_with_settings(canvas, text, size, color, &settings);
    }

    /// Draw a single line centered horizontally with its top edge at `y`.
    pub fn draw_line_at(&self, canvas: &mut Canvas, text: &str, size: f32, color: Rgb<u8>, y: f32) {
        let settings = LayoutSettings {
            y,
            max_width: Some(canvas.width() as f32),
            horizontal_align: HorizontalAlign::Center,
            ..LayoutSettings::default()
        };
        self.draw_with_settings(canvas, text, size, color, &settings);
    }

    fn draw_with_settings(
        &self,
        canvas: &mut Canvas,
        text: &str,
        size: f32,
        color: Rgb<u8>,
        settings: &LayoutSettings,
    ) {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(settings);
        layout.append(&[&self.inner], &LayoutStyle::new(text, size, 0));

        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (_, bitmap) = self.inner.rasterize_config(glyph.key);
            let origin_x = glyph.x as i32;
            let origin_y = glyph.y as i32;
            for (i, coverage) in bitmap.iter().enumerate() {
                let dx = (i % glyph.width) as i32;
                let dy = (i / glyph.width) as i32;
                canvas.blend_pixel(origin_x + dx, origin_y + dy, color, *coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_returns_none_for_missing_paths() {
        let candidates = vec![PathBuf::from("/nonexistent/font-a.ttf")];
        assert!(Font::locate(&candidates).is_none());
    }

    #[test]
    fn from_file_rejects_non_font_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        fs::write(&path, b"definitely not a font").unwrap();
        match Font::from_file(&path) {
            Err(FontError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn drawing_with_a_located_font_marks_pixels() {
        // Only meaningful on machines that have one of the system fonts;
        // skip silently elsewhere so CI without fonts still passes.
        let Some(font) = Font::locate(&system_font_candidates()) else {
            return;
        };
        let mut canvas = Canvas::new(200, 100, Rgb([0, 0, 0]));
        font.draw_centered(&mut canvas, "Hi", 40.0, Rgb([255, 255, 255]));
        let img = canvas.into_image();
        assert!(img.pixels().any(|p| p.0[0] > 0));
    }
}
