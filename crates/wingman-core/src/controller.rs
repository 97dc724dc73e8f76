use std::path::PathBuf;

use wingman_types::{Mode, RegionConfig};

use crate::error::ConfigError;
use crate::persona::load_persona_examples;
use crate::ports::{ChatSource, ConfigProvider, Notifier, ReplyModel, ReplySink, SuggestionEditor};
use crate::prompt::{build_prompt, trim_context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    AwaitingDecision,
}

/// Tuning knobs for prompt assembly, taken from settings at startup.
pub struct ControllerOptions {
    pub persona_dir: PathBuf,
    pub context_lines: usize,
    pub example_cap: usize,
}

/// The suggestion lifecycle: one method per hotkey event, processed to
/// completion before the next event is taken.
///
/// State is the two-field record `(awaiting_decision, last_suggestion)`.
/// Accept and edit clear only the decision flag; the text is retained so a
/// later follow-up generation can extend the reply that was actually sent.
/// Reject clears both.
pub struct SuggestionController {
    config: Box<dyn ConfigProvider>,
    chat: Box<dyn ChatSource>,
    model: Box<dyn ReplyModel>,
    sink: Box<dyn ReplySink>,
    editor: Box<dyn SuggestionEditor>,
    notifier: Box<dyn Notifier>,
    options: ControllerOptions,
    awaiting_decision: bool,
    last_suggestion: Option<String>,
}

impl SuggestionController {
    pub fn new(
        config: Box<dyn ConfigProvider>,
        chat: Box<dyn ChatSource>,
        model: Box<dyn ReplyModel>,
        sink: Box<dyn ReplySink>,
        editor: Box<dyn SuggestionEditor>,
        notifier: Box<dyn Notifier>,
        options: ControllerOptions,
    ) -> Self {
        Self {
            config,
            chat,
            model,
            sink,
            editor,
            notifier,
            options,
            awaiting_decision: false,
            last_suggestion: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        if self.awaiting_decision {
            LifecycleState::AwaitingDecision
        } else {
            LifecycleState::Idle
        }
    }

    /// The suggestion currently waiting for a decision, if any.
    pub fn pending(&self) -> Option<&str> {
        if self.awaiting_decision {
            self.last_suggestion.as_deref()
        } else {
            None
        }
    }

    /// The most recent suggestion text, pending or already delivered.
    pub fn last_suggestion(&self) -> Option<&str> {
        self.last_suggestion.as_deref()
    }

    /// Run a full capture → prompt → model cycle. Any failure warns and
    /// leaves the lifecycle exactly as it was; a fresh suggestion replaces a
    /// pending one without confirmation.
    pub async fn generate(&mut self, mode: Mode) {
        let Some(config) = self.load_config() else {
            return;
        };

        let region = config.capture_region();
        tracing::info!(?mode, ?region, "generation triggered");

        let chat_text = match self.chat.read_chat(region) {
            Ok(text) => text,
            Err(e) => {
                self.notifier.warn(&format!("Text extraction failed: {e}"));
                return;
            }
        };
        if chat_text.trim().is_empty() {
            self.notifier
                .warn("No text detected in region. Recheck the calibrated area.");
            return;
        }

        let examples = load_persona_examples(&self.options.persona_dir, self.options.example_cap);
        let context = trim_context(&chat_text, self.options.context_lines);
        let prompt = build_prompt(&context, &examples, mode, self.last_suggestion.as_deref());

        self.notifier.info("Asking the model for a suggestion...");
        let completion = match self.model.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                self.notifier.warn(&format!("API error: {e}"));
                return;
            }
        };

        let suggestion = completion.trim();
        if suggestion.is_empty() {
            self.notifier.info("No suggestion generated.");
            return;
        }

        self.last_suggestion = Some(suggestion.to_string());
        self.awaiting_decision = true;
        self.notifier.suggestion(suggestion);
    }

    /// Deliver the pending suggestion as-is.
    pub fn accept(&mut self) {
        let Some(text) = self.pending().map(str::to_string) else {
            self.notifier.info("No pending suggestion.");
            return;
        };
        let Some(config) = self.load_config() else {
            return;
        };

        match self.sink.deliver(&text, config.input_box, config.auto_send) {
            Ok(()) => {
                self.awaiting_decision = false;
                self.notifier.info(if config.auto_send {
                    "Accepted. Pasted and sent."
                } else {
                    "Accepted. Pasted."
                });
            }
            Err(e) => self.notifier.warn(&format!("Delivery failed: {e}")),
        }
    }

    /// Let the operator revise the pending suggestion before delivery. A
    /// cancelled edit leaves the suggestion pending.
    pub fn edit(&mut self) {
        let Some(current) = self.pending().map(str::to_string) else {
            self.notifier.info("No pending suggestion.");
            return;
        };

        let Some(replacement) = self.editor.revise(&current) else {
            self.notifier.info("Edit cancelled.");
            return;
        };

        let Some(config) = self.load_config() else {
            return;
        };

        match self
            .sink
            .deliver(&replacement, config.input_box, config.auto_send)
        {
            Ok(()) => {
                self.awaiting_decision = false;
                self.notifier.info(if config.auto_send {
                    "Edited message pasted and sent."
                } else {
                    "Edited message pasted."
                });
            }
            Err(e) => self.notifier.warn(&format!("Delivery failed: {e}")),
        }
    }

    /// Discard the pending suggestion.
    pub fn reject(&mut self) {
        if !self.awaiting_decision {
            self.notifier.info("Nothing to reject.");
            return;
        }
        self.awaiting_decision = false;
        self.last_suggestion = None;
        self.notifier.info("Suggestion rejected.");
    }

    fn load_config(&self) -> Option<RegionConfig> {
        match self.config.load() {
            Ok(config) => Some(config),
            Err(ConfigError::Missing(path)) => {
                self.notifier.warn(&format!(
                    "No region configured ({} missing). Run `calibrate` first.",
                    path.display()
                ));
                None
            }
            Err(e) => {
                self.notifier
                    .warn(&format!("Could not load region config: {e}"));
                None
            }
        }
    }
}
