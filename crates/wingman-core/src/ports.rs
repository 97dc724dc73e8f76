use async_trait::async_trait;
use wingman_types::{CaptureRegion, RegionConfig, ScreenPoint};

use crate::error::{ConfigError, ExtractError, GenerateError};

/// Source of the persisted region configuration. Re-queried at the start of
/// every cycle so recalibration takes effect without a restart.
pub trait ConfigProvider: Send {
    fn load(&self) -> Result<RegionConfig, ConfigError>;
}

/// Reads the visible chat text out of a screen region.
pub trait ChatSource: Send {
    fn read_chat(&self, region: CaptureRegion) -> Result<String, ExtractError>;
}

/// Remote model producing a reply draft for an assembled prompt.
///
/// The returned completion is raw text; it may legitimately be empty, which
/// callers treat as "no suggestion" rather than an error.
#[async_trait]
pub trait ReplyModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Delivers accepted text into the target chat application: clipboard copy,
/// optional click-to-focus on the input box, paste, optional submit.
pub trait ReplySink: Send {
    fn deliver(
        &mut self,
        text: &str,
        input_box: Option<ScreenPoint>,
        auto_send: bool,
    ) -> anyhow::Result<()>;
}

/// Collects a revised suggestion from the operator. `None` means the edit
/// was cancelled and the pending suggestion stays untouched.
pub trait SuggestionEditor: Send {
    fn revise(&mut self, current: &str) -> Option<String>;
}

/// Operator-facing messages. Diagnostics go through `tracing`; this is the
/// console surface the operator actually watches while inside the chat app.
pub trait Notifier: Send {
    fn suggestion(&self, text: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
