use image::{GrayImage, RgbaImage};
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::median_filter;

/// Block radius for the adaptive threshold; a 31px window reads small
/// chat-bubble text cleanly at typical display scaling.
const THRESHOLD_BLOCK_RADIUS: u32 = 15;

/// Normalize a captured frame for recognition: grayscale, noise smoothing,
/// adaptive binarization.
pub fn prepare_for_ocr(frame: &RgbaImage) -> GrayImage {
    let gray = image::imageops::grayscale(frame);
    let smoothed = median_filter(&gray, 1, 1);
    adaptive_threshold(&smoothed, THRESHOLD_BLOCK_RADIUS)
}
