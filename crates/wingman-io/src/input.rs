use std::thread;
use std::time::Duration;

use enigo::{Enigo, Key, KeyboardControllable, MouseButton, MouseControllable};
use wingman_types::ScreenPoint;

/// Pause after clicking the input box, letting focus settle before pasting.
const FOCUS_SETTLE: Duration = Duration::from_millis(150);
/// Pause between paste and submit.
const SEND_SETTLE: Duration = Duration::from_millis(100);

/// Pointer and keystroke injection into the foreground application.
///
/// Holds a live display connection, so it is created per delivery and never
/// carried across threads.
pub struct DesktopInput {
    enigo: Enigo,
}

impl DesktopInput {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
        }
    }

    pub fn click_at(&mut self, point: ScreenPoint) {
        self.enigo.mouse_move_to(point.x, point.y);
        self.enigo.mouse_click(MouseButton::Left);
        thread::sleep(FOCUS_SETTLE);
    }

    pub fn paste_chord(&mut self) {
        self.enigo.key_down(Key::Control);
        self.enigo.key_click(Key::Layout('v'));
        self.enigo.key_up(Key::Control);
    }

    pub fn submit(&mut self) {
        thread::sleep(SEND_SETTLE);
        self.enigo.key_click(Key::Return);
    }
}

impl Default for DesktopInput {
    fn default() -> Self {
        Self::new()
    }
}
