use std::time::Duration;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wingman_io::{HotkeyAction, HotkeySet};
use wingman_types::{AppEvent, Mode};

/// Bridge global hotkey presses into app events. Registration and polling
/// stay on one dedicated blocking thread for the listener's lifetime.
pub async fn hotkey_watcher(
    poll_interval: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let handle = tokio::task::spawn_blocking(move || {
        let hotkeys = match HotkeySet::register_defaults() {
            Ok(set) => set,
            Err(e) => {
                tracing::error!("Failed to register hotkeys: {e}");
                return;
            }
        };
        tracing::info!("global hotkeys registered");

        let tx = event_tx.to_sync();
        loop {
            if cancel.is_cancelled() {
                break;
            }

            if let Some(action) = hotkeys.poll() {
                tracing::debug!(?action, "hotkey pressed");
                if tx.send(app_event(action)).is_err() {
                    break;
                }
            }

            std::thread::sleep(poll_interval);
        }

        tracing::info!("hotkey listener stopping");
    });

    handle.await?;
    Ok(())
}

fn app_event(action: HotkeyAction) -> AppEvent {
    match action {
        HotkeyAction::GenerateReply => AppEvent::Generate(Mode::Reply),
        HotkeyAction::GenerateFollowup => AppEvent::Generate(Mode::Followup),
        HotkeyAction::Accept => AppEvent::Accept,
        HotkeyAction::Edit => AppEvent::Edit,
        HotkeyAction::Reject => AppEvent::Reject,
    }
}
