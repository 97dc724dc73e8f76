use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};

/// The five operator actions, each bound to a global hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    GenerateReply,
    GenerateFollowup,
    Accept,
    Edit,
    Reject,
}

impl HotkeyAction {
    /// Human-readable chord for the startup banner.
    pub fn chord(self) -> &'static str {
        match self {
            HotkeyAction::GenerateReply => "Ctrl+Alt+Space",
            HotkeyAction::GenerateFollowup => "Ctrl+Alt+Shift+Space",
            HotkeyAction::Accept => "Ctrl+Alt+R",
            HotkeyAction::Edit => "Ctrl+Alt+E",
            HotkeyAction::Reject => "Ctrl+Alt+N",
        }
    }
}

/// System-wide registration of the five action hotkeys, polled from a
/// dedicated blocking thread.
pub struct HotkeySet {
    manager: GlobalHotKeyManager,
    bindings: Vec<(HotKey, HotkeyAction)>,
}

impl HotkeySet {
    /// Register the default bindings (rebind here if they clash with other
    /// software on the machine).
    pub fn register_defaults() -> Result<Self> {
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        let ctrl_alt = Modifiers::CONTROL | Modifiers::ALT;
        let bindings = vec![
            (
                HotKey::new(Some(ctrl_alt), Code::Space),
                HotkeyAction::GenerateReply,
            ),
            (
                HotKey::new(Some(ctrl_alt | Modifiers::SHIFT), Code::Space),
                HotkeyAction::GenerateFollowup,
            ),
            (
                HotKey::new(Some(ctrl_alt), Code::KeyR),
                HotkeyAction::Accept,
            ),
            (HotKey::new(Some(ctrl_alt), Code::KeyE), HotkeyAction::Edit),
            (
                HotKey::new(Some(ctrl_alt), Code::KeyN),
                HotkeyAction::Reject,
            ),
        ];

        for (hotkey, action) in &bindings {
            manager
                .register(*hotkey)
                .with_context(|| format!("Failed to register {}", action.chord()))?;
        }

        Ok(Self { manager, bindings })
    }

    /// Drain pending hotkey events, returning the first press since the
    /// last poll. Non-blocking.
    pub fn poll(&self) -> Option<HotkeyAction> {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if event.state == HotKeyState::Pressed
                && let Some((_, action)) = self
                    .bindings
                    .iter()
                    .find(|(hotkey, _)| hotkey.id() == event.id)
            {
                return Some(*action);
            }
        }
        None
    }
}

impl Drop for HotkeySet {
    fn drop(&mut self) {
        for (hotkey, _) in &self.bindings {
            let _ = self.manager.unregister(*hotkey);
        }
    }
}
