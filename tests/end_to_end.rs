//! Full-workflow checks over a scratch output root.

use std::path::Path;

use assetprep::catalog;
use assetprep::config::Config;
use assetprep::fetch::{self, FetchError, ImageSource};
use assetprep::placeholder::{self, PlaceholderRenderer};

struct DeadNetwork;

impl ImageSource for DeadNetwork {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Io(std::io::Error::other("network disabled")))
    }
}

fn config_for(root: &Path) -> Config {
    Config {
        output_root: root.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn generator_then_fetch_leaves_a_complete_file_set() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let renderer = PlaceholderRenderer::new(&config);

    placeholder::generate_all(&renderer, &config).unwrap();
    let summary = fetch::run(&DeadNetwork, &renderer, &config).unwrap();

    // Every download destination already existed as a placeholder, so the
    // sweep had nothing to backfill.
    assert_eq!(summary.downloaded, 0);
    assert_eq!(summary.backfilled, 0);

    for spec in catalog::founders()
        .iter()
        .chain(&catalog::characters())
        .chain(&catalog::institutions())
    {
        let dest = dir.path().join(spec.file);
        let (w, h) = image::image_dimensions(&dest).unwrap();
        assert_eq!((w, h), (spec.width, spec.height), "{}", spec.file);
    }
}

#[test]
fn fetch_alone_populates_every_expected_destination() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let renderer = PlaceholderRenderer::new(&config);

    let summary = fetch::run(&DeadNetwork, &renderer, &config).unwrap();
    let total: usize = catalog::download_groups().iter().map(|g| g.items.len()).sum();
    assert_eq!(summary.skipped, total);
    assert_eq!(summary.backfilled, total);

    for group in catalog::download_groups() {
        for item in &group.items {
            let dest = dir.path().join(item.file);
            assert!(image::open(&dest).is_ok(), "unreadable {}", item.file);
        }
    }
}

#[test]
fn rerunning_fetch_does_not_touch_backfilled_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let renderer = PlaceholderRenderer::new(&config);

    fetch::run(&DeadNetwork, &renderer, &config).unwrap();
    let probe = dir.path().join("characters/esfp-homer.png");
    let before = std::fs::read(&probe).unwrap();

    let summary = fetch::run(&DeadNetwork, &renderer, &config).unwrap();
    assert_eq!(summary.backfilled, 0);
    assert_eq!(std::fs::read(&probe).unwrap(), before);
}
