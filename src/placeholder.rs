//! Placeholder image synthesis.
//!
//! Two styles come out of here:
//!
//! - **label**: a solid background with a centered (possibly multi-line)
//!   text label, used by the generator for every catalog entry;
//! - **badge**: a solid background with a centered white disc carrying a
//!   large type line and a smaller name line, used by the fetcher as the
//!   stand-in for downloads that never succeeded.
//!
//! Missing fonts degrade to the plain background with a warning; a write
//! failure is a real error and propagates.

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgb;

use crate::catalog::{self, Badge, PlaceholderSpec};
use crate::config::Config;
use crate::graphics::{Canvas, Font, system_font_candidates};

const LABEL_SIZE: f32 = 20.0;
const BADGE_TYPE_SIZE: f32 = 36.0;
const BADGE_NAME_SIZE: f32 = 24.0;
const BADGE_MARGIN: u32 = 30;

/// Errors that can occur while writing placeholder images.
#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Encode(image::ImageError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "IO error: {}", e),
            RenderError::Encode(e) => write!(f, "Image encode error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Encode(e)
    }
}

/// Renders placeholder canvases and writes them under the output root.
pub struct PlaceholderRenderer {
    font: Option<Font>,
}

impl PlaceholderRenderer {
    /// Set up a renderer, locating a font through the configured chain.
    pub fn new(config: &Config) -> Self {
        let mut candidates = config.font_paths.clone();
        candidates.extend(system_font_candidates());
        let font = Font::locate(&candidates);
        if font.is_none() {
            log::warn!("no usable font found; placeholders will have no text");
        }
        Self { font }
    }

    /// Build a renderer from an already-loaded font (or none).
    pub fn with_font(font: Option<Font>) -> Self {
        Self { font }
    }

    /// Render the label style: solid background, centered text.
    pub fn render_label(&self, spec: &PlaceholderSpec) -> Canvas {
        let mut canvas = Canvas::new(spec.width, spec.height, spec.background);
        if let Some(font) = &self.font {
            font.draw_centered(&mut canvas, spec.label, LABEL_SIZE, spec.foreground);
        }
        canvas
    }

    /// Render the badge style: background, white disc, type and name lines.
    pub fn render_badge(&self, badge: &Badge, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height, badge.background);
        canvas.fill_disc(BADGE_MARGIN, Rgb([255, 255, 255]));
        if let Some(font) = &self.font {
            let type_y = height as f32 / 3.0;
            font.draw_line_at(&mut canvas, badge.type_line, BADGE_TYPE_SIZE, Rgb([50, 50, 50]), type_y);
            font.draw_line_at(
                &mut canvas,
                badge.name_line,
                BADGE_NAME_SIZE,
                Rgb([80, 80, 80]),
                type_y + BADGE_TYPE_SIZE + 24.0,
            );
        }
        canvas
    }

    /// Write a canvas to `path`, creating parent directories as needed.
    pub fn write(&self, canvas: &Canvas, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        canvas.save(path)?;
        Ok(())
    }
}

fn generate_batch(
    renderer: &PlaceholderRenderer,
    root: &Path,
    specs: &[PlaceholderSpec],
) -> Result<usize, RenderError> {
    for spec in specs {
        let dest: PathBuf = root.join(spec.file);
        let canvas = renderer.render_label(spec);
        renderer.write(&canvas, &dest)?;
        println!("✅ Created placeholder: {}", dest.display());
    }
    Ok(specs.len())
}

/// Generate every placeholder in the catalog under the output root.
/// Returns the number of images written.
pub fn generate_all(renderer: &PlaceholderRenderer, config: &Config) -> Result<usize, RenderError> {
    let root = &config.output_root;
    let mut written = 0;

    println!("📸 Creating founder placeholders...");
    written += generate_batch(renderer, root, &catalog::founders())?;

    println!("\n🎭 Creating character placeholders...");
    written += generate_batch(renderer, root, &catalog::characters())?;

    println!("\n🏛️ Creating institution logo placeholders...");
    written += generate_batch(renderer, root, &catalog::institutions())?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::image_dimensions;

    fn test_config(root: &Path) -> Config {
        Config {
            output_root: root.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn generate_all_writes_every_catalog_entry() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let renderer = PlaceholderRenderer::new(&config);

        let written = generate_all(&renderer, &config).unwrap();
        let expected: Vec<PlaceholderSpec> = catalog::founders()
            .into_iter()
            .chain(catalog::characters())
            .chain(catalog::institutions())
            .collect();
        assert_eq!(written, expected.len());

        for spec in &expected {
            let dest = dir.path().join(spec.file);
            assert!(dest.exists(), "missing {}", dest.display());
            let (w, h) = image_dimensions(&dest).unwrap();
            assert_eq!((w, h), (spec.width, spec.height), "wrong size for {}", spec.file);
        }
    }

    #[test]
    fn rerunning_the_generator_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let renderer = PlaceholderRenderer::new(&config);

        generate_all(&renderer, &config).unwrap();
        // Directories already exist on the second pass.
        generate_all(&renderer, &config).unwrap();
    }

    #[test]
    fn label_canvas_matches_spec_dimensions_and_background() {
        let renderer = PlaceholderRenderer::with_font(None);
        let spec = PlaceholderSpec {
            label: "INTJ\nStewie",
            file: "characters/intj-stewie.png",
            width: 256,
            height: 256,
            background: Rgb([128, 0, 128]),
            foreground: Rgb([255, 255, 255]),
        };
        let img = renderer.render_label(&spec).into_image();
        assert_eq!(img.dimensions(), (256, 256));
        // Without a font the canvas stays solid background.
        assert_eq!(*img.get_pixel(0, 0), Rgb([128, 0, 128]));
    }

    #[test]
    fn badge_canvas_has_a_white_disc() {
        let renderer = PlaceholderRenderer::with_font(None);
        let badge = Badge {
            type_line: "ESFP",
            name_line: "Homer Simpson",
            background: Rgb([255, 220, 100]),
        };
        let img = renderer.render_badge(&badge, 300, 300).into_image();
        assert_eq!(*img.get_pixel(150, 150), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 220, 100]));
    }
}
