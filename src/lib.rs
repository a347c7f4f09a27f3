//! assetprep - prepares the static image assets for the web project.
//!
//! Two phases, runnable independently or back to back:
//!
//! - placeholder generation: synthesizes labeled stand-in images for every
//!   entry in the compiled-in catalog;
//! - image fetching: downloads the real artwork over HTTP, validates each
//!   payload by decoding it, and backfills badge placeholders for anything
//!   that never arrived.

pub mod catalog;
pub mod config;
pub mod fetch;
pub mod graphics;
pub mod placeholder;

pub use config::{Config, ConfigError};
pub use fetch::{FetchSummary, HttpSource, ImageSource};
pub use graphics::{Canvas, Font, FontError};
pub use placeholder::{PlaceholderRenderer, RenderError, generate_all};
