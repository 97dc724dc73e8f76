use serde::{Deserialize, Serialize};

/// Screen rectangle in capture form: top-left corner plus extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Absolute screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Suggestion generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fresh reply to the most recent message.
    Reply,
    /// Extend the previous suggestion without repeating it.
    Followup,
}

/// Events flowing from the hotkey listener into the main loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Generate(Mode),
    Accept,
    Edit,
    Reject,
}

/// Persisted region record, corner form as written by the calibrator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CornerRegion {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl CornerRegion {
    /// Corner form to capture form. Width/height are positive whenever the
    /// calibration invariant (bottom-right strictly greater) held at save.
    pub fn to_capture(self) -> CaptureRegion {
        CaptureRegion {
            x: self.x1,
            y: self.y1,
            width: (self.x2 - self.x1).max(0) as u32,
            height: (self.y2 - self.y1).max(0) as u32,
        }
    }
}

/// Informational record of the screen the region was calibrated against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// The full persisted configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub region: CornerRegion,
    pub screen: ScreenSize,
    pub input_box: Option<ScreenPoint>,
    pub auto_send: bool,
}

impl RegionConfig {
    pub fn capture_region(&self) -> CaptureRegion {
        self.region.to_capture()
    }
}
