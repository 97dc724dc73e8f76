use std::future::Future;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wingman_config::{RegionStore, Settings};
use wingman_core::controller::{ControllerOptions, SuggestionController};
use wingman_io::DesktopSink;
use wingman_model::GeminiClient;
use wingman_ocr::ChatRegionReader;
use wingman_types::AppEvent;

use crate::console::{self, ConsoleEditor, ConsoleNotifier};
use crate::events::event_loop;
use crate::io::hotkey_watcher;

/// Centralized channel management
pub struct ChannelSet {
    pub hotkey_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            hotkey_to_app: kanal::bounded_async(64), // hotkey burst capacity
        }
    }
}

pub async fn run(settings: Settings, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let controller = build_controller(&settings)?;
    let channels = ChannelSet::new();
    let cancel = CancellationToken::new();

    console::print_banner();

    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    tasks.spawn(hotkey_watcher(
        Duration::from_millis(50),
        cancel.child_token(),
        channels.hotkey_to_app.0.clone(),
    ));
    tasks.spawn(event_loop(controller, channels.hotkey_to_app.1.clone()));

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    cancel.cancel();
    Ok(())
}

/// Wire the lifecycle controller to the real desktop backends.
fn build_controller(settings: &Settings) -> anyhow::Result<SuggestionController> {
    let store = RegionStore::new(settings.region_file.clone());
    let chat = ChatRegionReader::new(settings.ocr_lang.clone());
    let model = GeminiClient::new(
        settings.api_key.clone(),
        settings.model_name.clone(),
        Duration::from_secs(settings.timeout_seconds),
    )?;

    Ok(SuggestionController::new(
        Box::new(store),
        Box::new(chat),
        Box::new(model),
        Box::new(DesktopSink::new()),
        Box::new(ConsoleEditor),
        Box::new(ConsoleNotifier::new()),
        ControllerOptions {
            persona_dir: settings.persona_dir.clone(),
            context_lines: settings.context_lines,
            example_cap: settings.example_cap,
        },
    ))
}
