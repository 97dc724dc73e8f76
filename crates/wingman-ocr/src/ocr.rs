use std::collections::HashMap;

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage};
use rusty_tesseract::{Args, Image};
use unicode_normalization::UnicodeNormalization;

/// Recognize text in a prepared frame. PSM 6 assumes a single uniform text
/// block, which is how a cropped chat transcript reads.
pub fn recognize(prepared: &GrayImage, lang: &str) -> Result<String> {
    let dynamic = DynamicImage::ImageLuma8(prepared.clone());
    let image =
        Image::from_dynamic_image(&dynamic).context("Failed to hand frame to tesseract")?;

    let args = Args {
        lang: lang.to_string(),
        config_variables: HashMap::new(),
        dpi: Some(150),
        psm: Some(6),
        oem: Some(3),
    };

    rusty_tesseract::image_to_string(&image, &args).context("Recognition failed")
}

/// Light cleanup of recognizer output: NFKC normalization, blank lines
/// dropped, trailing whitespace stripped per line.
pub fn tidy_recognized_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    normalized
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
