use kanal::AsyncReceiver;
use wingman_core::controller::SuggestionController;
use wingman_types::AppEvent;

/// App's main loop. One event runs to completion before the next is taken,
/// so overlapping generations are impossible by construction.
pub async fn event_loop(
    mut controller: SuggestionController,
    rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for hotkeys");
    loop {
        let event = rx.recv().await?;
        tracing::debug!(?event, "handling event");

        match event {
            AppEvent::Generate(mode) => controller.generate(mode).await,
            AppEvent::Accept => controller.accept(),
            AppEvent::Edit => controller.edit(),
            AppEvent::Reject => controller.reject(),
        }
    }
}
