mod downloader;
mod source;

pub use downloader::{Downloader, FetchSummary, fill_missing, run};
pub use source::{FetchError, HttpSource, ImageSource};
