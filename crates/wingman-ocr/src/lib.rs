mod capture;
mod ocr;
mod preprocess;

pub use capture::{capture_screen_region, primary_screen_size};
pub use ocr::{recognize, tidy_recognized_text};
pub use preprocess::prepare_for_ocr;

use wingman_core::error::ExtractError;
use wingman_core::ports::ChatSource;
use wingman_types::CaptureRegion;

/// OCR-backed chat source over the calibrated screen region.
pub struct ChatRegionReader {
    lang: String,
}

impl ChatRegionReader {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }
}

impl ChatSource for ChatRegionReader {
    fn read_chat(&self, region: CaptureRegion) -> Result<String, ExtractError> {
        let frame = capture::capture_screen_region(region)
            .map_err(|e| ExtractError::Capture(e.to_string()))?;
        let prepared = preprocess::prepare_for_ocr(&frame);
        let raw = ocr::recognize(&prepared, &self.lang)
            .map_err(|e| ExtractError::Recognition(e.to_string()))?;

        let text = ocr::tidy_recognized_text(&raw);
        tracing::debug!(chars = text.len(), "chat text recognized");
        Ok(text)
    }
}
