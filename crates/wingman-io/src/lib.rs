pub mod clipboard;
pub mod hotkey;
pub mod input;

pub use hotkey::{HotkeyAction, HotkeySet};

use wingman_core::ports::ReplySink;
use wingman_types::ScreenPoint;

use crate::input::DesktopInput;

/// Clipboard-and-keystroke delivery into the target chat application:
/// copy, optional click-to-focus, paste chord, optional submit.
#[derive(Default)]
pub struct DesktopSink;

impl DesktopSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReplySink for DesktopSink {
    fn deliver(
        &mut self,
        text: &str,
        input_box: Option<ScreenPoint>,
        auto_send: bool,
    ) -> anyhow::Result<()> {
        clipboard::copy_text(text)?;

        let mut input = DesktopInput::new();
        if let Some(point) = input_box {
            input.click_at(point);
        }
        input.paste_chord();
        if auto_send {
            input.submit();
        }

        tracing::debug!(auto_send, clicked = input_box.is_some(), "reply delivered");
        Ok(())
    }
}
