use anyhow::{Context, Result};
use image::RgbaImage;
use wingman_types::CaptureRegion;
use xcap::Monitor;

/// Capture a region of the screen as raw RGBA pixels. The monitor fully
/// containing the region is preferred; otherwise the first monitor is used.
pub fn capture_screen_region(region: CaptureRegion) -> Result<RgbaImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && region.x + region.width as i32 <= m.x() + m.width() as i32
                && region.y + region.height as i32 <= m.y() + m.height() as i32
        })
        .or(monitors.first())
        .context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()) as u32,
        (region.y - monitor.y()) as u32,
        region.width,
        region.height,
    )
    .to_image();

    // Rebuild from raw parts so downstream code only ever sees this crate's
    // `image` types, independent of the version xcap bundles.
    let (width, height) = (cropped.width(), cropped.height());
    RgbaImage::from_raw(width, height, cropped.into_raw())
        .context("Captured frame had unexpected dimensions")
}

/// Size of the primary monitor, recorded informationally at calibration.
pub fn primary_screen_size() -> Result<(u32, u32)> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors.first().context("No monitor found")?;
    Ok((monitor.width(), monitor.height()))
}
