//! Download loop and fallback sweep.
//!
//! Each remote image gets a bounded number of attempts. A response only
//! counts as a success once it decodes as an image; the decoded image is
//! re-encoded on save, so a truncated or mislabeled payload never lands on
//! disk. Exhausted retries skip the item - one bad URL never fails the run.
//!
//! After all groups, the sweep backfills every still-missing destination
//! with a badge placeholder, so the expected file set is always complete.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::catalog::{self, RemoteImage};
use crate::config::Config;
use crate::placeholder::{PlaceholderRenderer, RenderError};

use super::source::{FetchError, ImageSource};

const BADGE_SIZE: u32 = 300;

/// Counts from one fetch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Images downloaded and validated.
    pub downloaded: usize,
    /// Images skipped after exhausting retries.
    pub skipped: usize,
    /// Missing destinations filled by the fallback sweep.
    pub backfilled: usize,
}

/// Drives downloads through an [`ImageSource`].
pub struct Downloader<'a, S: ImageSource> {
    source: &'a S,
    max_retries: u32,
}

impl<'a, S: ImageSource> Downloader<'a, S> {
    pub fn new(source: &'a S, max_retries: u32) -> Self {
        // A zero bound would silently skip everything.
        Self {
            source,
            max_retries: max_retries.max(1),
        }
    }

    /// Fetch one image to `dest`, retrying up to the configured bound.
    /// Returns whether the file was written.
    pub fn download(&self, item: &RemoteImage, dest: &Path) -> bool {
        for attempt in 1..=self.max_retries {
            println!(
                "📥 Downloading {} (attempt {}/{})",
                item.name, attempt, self.max_retries
            );
            match self.try_once(item.url, dest) {
                Ok(()) => {
                    println!("✅ Downloaded: {}", dest.display());
                    return true;
                }
                Err(e) => {
                    println!("❌ Attempt {} failed: {}", attempt, e);
                    log::debug!("{}: {:?}", item.url, e);
                }
            }
        }
        println!("⚠️  Skipping {}", item.name);
        false
    }

    fn try_once(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let bytes = self.source.fetch(url)?;
        // Decoding is the integrity check; saving re-encodes.
        let img = image::load_from_memory(&bytes)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        save_as(img, dest)?;
        Ok(())
    }
}

/// Save honoring the destination extension. JPEG carries no alpha channel,
/// so those destinations are flattened to RGB first.
fn save_as(img: DynamicImage, dest: &Path) -> Result<(), image::ImageError> {
    let is_jpeg = dest
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"));
    if is_jpeg {
        DynamicImage::ImageRgb8(img.to_rgb8()).save(dest)
    } else {
        img.save(dest)
    }
}

/// Run the whole fetch phase: every download group, then the fallback sweep.
pub fn run<S: ImageSource>(
    source: &S,
    renderer: &PlaceholderRenderer,
    config: &Config,
) -> Result<FetchSummary, RenderError> {
    let downloader = Downloader::new(source, config.max_retries);
    let mut summary = FetchSummary::default();

    for group in catalog::download_groups() {
        println!("\n{} Downloading {}...", group.marker, group.title);
        for item in &group.items {
            println!("🔍 Processing {}...", item.name);
            let dest = config.output_root.join(item.file);
            if downloader.download(item, &dest) {
                summary.downloaded += 1;
            } else {
                summary.skipped += 1;
            }
        }
    }

    println!("\n🎨 Checking for missing images...");
    summary.backfilled = fill_missing(renderer, config)?;

    Ok(summary)
}

/// Backfill a badge placeholder for every download destination that is
/// still absent. Existing files, downloaded or not, are left alone.
pub fn fill_missing(renderer: &PlaceholderRenderer, config: &Config) -> Result<usize, RenderError> {
    let mut backfilled = 0;
    for group in catalog::download_groups() {
        for item in &group.items {
            let dest: PathBuf = config.output_root.join(item.file);
            if dest.exists() {
                continue;
            }
            let canvas = renderer.render_badge(&item.badge, BADGE_SIZE, BADGE_SIZE);
            renderer.write(&canvas, &dest)?;
            println!("✅ Created fallback image: {}", dest.display());
            backfilled += 1;
        }
    }
    Ok(backfilled)
}
