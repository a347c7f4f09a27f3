//! The asset catalog.
//!
//! Compiled-in tables describing every image the tool produces: placeholder
//! labels for the generator and remote URLs (with fallback badge data) for
//! the fetcher. Paths are relative and get joined onto the configured output
//! root.

use image::Rgb;

/// A placeholder image to synthesize: solid background, centered label.
#[derive(Debug, Clone)]
pub struct PlaceholderSpec {
    /// Label drawn on the canvas. `\n` starts a new line.
    pub label: &'static str,
    /// Destination path relative to the output root.
    pub file: &'static str,
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

/// Fallback badge drawn when a download never succeeds.
#[derive(Debug, Clone)]
pub struct Badge {
    /// Large line, e.g. the four-letter type code.
    pub type_line: &'static str,
    /// Smaller line underneath, e.g. the character name.
    pub name_line: &'static str,
    pub background: Rgb<u8>,
}

/// A remote image to download, with badge data for the fallback sweep.
#[derive(Debug, Clone)]
pub struct RemoteImage {
    pub name: &'static str,
    pub url: &'static str,
    /// Destination path relative to the output root.
    pub file: &'static str,
    pub badge: Badge,
}

/// A titled batch of downloads, printed under its own emoji header.
#[derive(Debug, Clone)]
pub struct DownloadGroup {
    pub marker: &'static str,
    pub title: &'static str,
    pub items: Vec<RemoteImage>,
}

const LAVENDER: Rgb<u8> = Rgb([220, 220, 255]);
const GRAY_TEXT: Rgb<u8> = Rgb([100, 100, 100]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// Temperament group colors.
const ANALYST_PURPLE: Rgb<u8> = Rgb([128, 0, 128]);
const DIPLOMAT_GREEN: Rgb<u8> = Rgb([34, 139, 34]);
const SENTINEL_BLUE: Rgb<u8> = Rgb([30, 144, 255]);
const EXPLORER_ORANGE: Rgb<u8> = Rgb([255, 165, 0]);

fn placeholder(
    label: &'static str,
    file: &'static str,
    size: u32,
    background: Rgb<u8>,
    foreground: Rgb<u8>,
) -> PlaceholderSpec {
    PlaceholderSpec {
        label,
        file,
        width: size,
        height: size,
        background,
        foreground,
    }
}

/// Founder portraits, 400x400 on a lavender background.
pub fn founders() -> Vec<PlaceholderSpec> {
    vec![
        placeholder("Carl Jung", "founders/carl-jung-real.jpg", 400, LAVENDER, GRAY_TEXT),
        placeholder("Isabel Myers", "founders/isabel-myers-real.jpg", 400, LAVENDER, GRAY_TEXT),
        placeholder("Katharine Briggs", "founders/katharine-briggs-real.jpg", 400, LAVENDER, GRAY_TEXT),
    ]
}

/// The sixteen type characters, 256x256, colored by temperament group.
pub fn characters() -> Vec<PlaceholderSpec> {
    let c = |label, file, bg| placeholder(label, file, 256, bg, WHITE);
    vec![
        // Analysts (NT)
        c("INTJ\nStewie", "characters/intj-stewie.png", ANALYST_PURPLE),
        c("INTP\nCharlie", "characters/intp-charlie-brown.png", ANALYST_PURPLE),
        c("ENTJ\nCartman", "characters/entj-cartman.png", ANALYST_PURPLE),
        c("ENTP\nRick", "characters/entp-rick.png", ANALYST_PURPLE),
        // Diplomats (NF)
        c("INFJ\nKyle", "characters/infj-kyle.png", DIPLOMAT_GREEN),
        c("INFP\nButters", "characters/infp-butters.png", DIPLOMAT_GREEN),
        c("ENFJ\nMufasa", "characters/enfj-mufasa.png", DIPLOMAT_GREEN),
        c("ENFP\nAnna", "characters/enfp-anna.png", DIPLOMAT_GREEN),
        // Sentinels (SJ)
        c("ISTJ\nHank", "characters/istj-hank.png", SENTINEL_BLUE),
        c("ISFJ\nMarge", "characters/isfj-marge.png", SENTINEL_BLUE),
        c("ESTJ\nLucy", "characters/estj-lucy.png", SENTINEL_BLUE),
        c("ESFJ\nMolly", "characters/esfj-molly.png", SENTINEL_BLUE),
        // Explorers (SP)
        c("ISTP\nKenny", "characters/istp-kenny.png", EXPLORER_ORANGE),
        c("ISFP\nSchroeder", "characters/isfp-schroeder.png", EXPLORER_ORANGE),
        c("ESTP\nBart", "characters/estp-bart.png", EXPLORER_ORANGE),
        c("ESFP\nHomer", "characters/esfp-homer.png", EXPLORER_ORANGE),
    ]
}

/// Institution logos, 200x200.
pub fn institutions() -> Vec<PlaceholderSpec> {
    vec![
        placeholder("Harvard", "institutions/harvard-shield.png", 200, Rgb([139, 0, 0]), WHITE),
        placeholder("Stanford", "institutions/stanford-logo.png", 200, Rgb([140, 21, 21]), WHITE),
        placeholder("MIT", "institutions/mit-logo.png", 200, Rgb([139, 69, 19]), WHITE),
        placeholder("Fortune 500", "institutions/enterprise-logo.png", 200, Rgb([70, 130, 180]), WHITE),
    ]
}

/// All remote images the fetcher attempts, grouped by source franchise.
pub fn download_groups() -> Vec<DownloadGroup> {
    let item = |name, url, file, type_line, name_line, background| RemoteImage {
        name,
        url,
        file,
        badge: Badge {
            type_line,
            name_line,
            background,
        },
    };

    vec![
        DownloadGroup {
            marker: "📸",
            title: "founder photos",
            items: vec![
                item(
                    "Isabel Briggs Myers",
                    "https://www.capt.org/Images/People/isabel-briggs-myers-portrait.jpg",
                    "founders/isabel-myers-real.jpg",
                    "MBTI",
                    "Isabel Briggs Myers",
                    LAVENDER,
                ),
                item(
                    "Katharine Cook Briggs",
                    "https://upload.wikimedia.org/wikipedia/commons/9/9e/Katherine_Cook_Briggs.jpeg",
                    "founders/katharine-briggs-real.jpg",
                    "MBTI",
                    "Katharine Cook Briggs",
                    LAVENDER,
                ),
            ],
        },
        DownloadGroup {
            marker: "🟨",
            title: "Simpsons characters",
            items: vec![
                item(
                    "Homer Simpson",
                    "https://static.wikia.nocookie.net/simpsons/images/b/bd/Homer_Simpson.png",
                    "characters/esfp-homer.png",
                    "ESFP",
                    "Homer Simpson",
                    Rgb([255, 220, 100]),
                ),
                item(
                    "Bart Simpson",
                    "https://static.wikia.nocookie.net/simpsons/images/a/aa/Bart_Simpson.png",
                    "characters/estp-bart.png",
                    "ESTP",
                    "Bart Simpson",
                    Rgb([100, 200, 255]),
                ),
                item(
                    "Marge Simpson",
                    "https://static.wikia.nocookie.net/simpsons/images/0/0b/Marge_Simpson.png",
                    "characters/isfj-marge.png",
                    "ISFJ",
                    "Marge Simpson",
                    Rgb([100, 255, 150]),
                ),
            ],
        },
        DownloadGroup {
            marker: "🔴",
            title: "South Park characters",
            items: vec![
                item(
                    "Eric Cartman",
                    "https://static.wikia.nocookie.net/southpark/images/7/73/Eric_cartman.png",
                    "characters/entj-cartman.png",
                    "ENTJ",
                    "Eric Cartman",
                    Rgb([255, 100, 100]),
                ),
                item(
                    "Kyle Broflovski",
                    "https://static.wikia.nocookie.net/southpark/images/8/8f/Kyle_broflovski.png",
                    "characters/infj-kyle.png",
                    "INFJ",
                    "Kyle Broflovski",
                    Rgb([150, 100, 255]),
                ),
                item(
                    "Kenny McCormick",
                    "https://static.wikia.nocookie.net/southpark/images/3/3e/Kenny_mccormick.png",
                    "characters/istp-kenny.png",
                    "ISTP",
                    "Kenny McCormick",
                    EXPLORER_ORANGE,
                ),
                item(
                    "Butters Stotch",
                    "https://static.wikia.nocookie.net/southpark/images/3/32/Butters_stotch.png",
                    "characters/infp-butters.png",
                    "INFP",
                    "Butters Stotch",
                    DIPLOMAT_GREEN,
                ),
            ],
        },
        DownloadGroup {
            marker: "🟤",
            title: "Peanuts characters",
            items: vec![
                item(
                    "Charlie Brown",
                    "https://static.wikia.nocookie.net/peanuts/images/a/a7/Charlie_Brown.png",
                    "characters/intp-charlie-brown.png",
                    "INTP",
                    "Charlie Brown",
                    ANALYST_PURPLE,
                ),
                item(
                    "Lucy van Pelt",
                    "https://static.wikia.nocookie.net/peanuts/images/8/88/Lucy_van_pelt.png",
                    "characters/estj-lucy.png",
                    "ESTJ",
                    "Lucy van Pelt",
                    SENTINEL_BLUE,
                ),
                item(
                    "Schroeder",
                    "https://static.wikia.nocookie.net/peanuts/images/1/1a/Schroeder.png",
                    "characters/isfp-schroeder.png",
                    "ISFP",
                    "Schroeder",
                    EXPLORER_ORANGE,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn character_catalog_covers_all_sixteen_types() {
        let chars = characters();
        assert_eq!(chars.len(), 16);
        let types: HashSet<&str> = chars
            .iter()
            .map(|c| c.label.split('\n').next().unwrap())
            .collect();
        assert_eq!(types.len(), 16);
    }

    #[test]
    fn placeholder_destinations_are_unique() {
        let mut seen = HashSet::new();
        for spec in founders().iter().chain(&characters()).chain(&institutions()) {
            assert!(seen.insert(spec.file), "duplicate destination {}", spec.file);
        }
    }

    #[test]
    fn every_download_destination_is_relative() {
        for group in download_groups() {
            for item in &group.items {
                assert!(!item.file.starts_with('/'), "{} is absolute", item.file);
                assert!(item.url.starts_with("https://"), "{} not https", item.url);
            }
        }
    }
}
