//! Lifecycle tests driving the controller through mock ports, no real
//! capture/model/injection backends involved.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wingman_types::{CaptureRegion, CornerRegion, Mode, RegionConfig, ScreenPoint, ScreenSize};

use crate::controller::{ControllerOptions, LifecycleState, SuggestionController};
use crate::error::{ConfigError, ExtractError, GenerateError};
use crate::ports::{ChatSource, ConfigProvider, Notifier, ReplyModel, ReplySink, SuggestionEditor};

fn test_config(auto_send: bool, input_box: Option<ScreenPoint>) -> RegionConfig {
    RegionConfig {
        region: CornerRegion {
            x1: 0,
            y1: 0,
            x2: 100,
            y2: 50,
        },
        screen: ScreenSize {
            width: 1920,
            height: 1080,
        },
        input_box,
        auto_send,
    }
}

struct FixedConfig(RegionConfig);

impl ConfigProvider for FixedConfig {
    fn load(&self) -> Result<RegionConfig, ConfigError> {
        Ok(self.0.clone())
    }
}

struct MissingConfig;

impl ConfigProvider for MissingConfig {
    fn load(&self) -> Result<RegionConfig, ConfigError> {
        Err(ConfigError::Missing(PathBuf::from("region.json")))
    }
}

struct FixedChat(&'static str);

impl ChatSource for FixedChat {
    fn read_chat(&self, _region: CaptureRegion) -> Result<String, ExtractError> {
        Ok(self.0.to_string())
    }
}

#[derive(Default)]
struct ModelLog {
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    log: Arc<ModelLog>,
}

impl ScriptedModel {
    fn new(replies: Vec<Result<String, GenerateError>>) -> (Self, Arc<ModelLog>) {
        let log = Arc::new(ModelLog::default());
        (
            Self {
                replies: Mutex::new(replies.into()),
                log: log.clone(),
            },
            log,
        )
    }
}

#[async_trait]
impl ReplyModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        self.log.calls.fetch_add(1, Ordering::SeqCst);
        self.log.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Delivery {
    text: String,
    input_box: Option<ScreenPoint>,
    auto_send: bool,
}

struct RecordingSink(Arc<Mutex<Vec<Delivery>>>);

impl RecordingSink {
    fn new() -> (Self, Arc<Mutex<Vec<Delivery>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Self(log.clone()), log)
    }
}

impl ReplySink for RecordingSink {
    fn deliver(
        &mut self,
        text: &str,
        input_box: Option<ScreenPoint>,
        auto_send: bool,
    ) -> anyhow::Result<()> {
        self.0.lock().unwrap().push(Delivery {
            text: text.to_string(),
            input_box,
            auto_send,
        });
        Ok(())
    }
}

struct ScriptedEditor(Option<String>);

impl SuggestionEditor for ScriptedEditor {
    fn revise(&mut self, _current: &str) -> Option<String> {
        self.0.clone()
    }
}

struct CollectingNotifier(Arc<Mutex<Vec<String>>>);

impl CollectingNotifier {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Self(log.clone()), log)
    }
}

impl Notifier for CollectingNotifier {
    fn suggestion(&self, text: &str) {
        self.0.lock().unwrap().push(format!("suggestion: {text}"));
    }

    fn info(&self, message: &str) {
        self.0.lock().unwrap().push(format!("info: {message}"));
    }

    fn warn(&self, message: &str) {
        self.0.lock().unwrap().push(format!("warn: {message}"));
    }
}

struct Harness {
    controller: SuggestionController,
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    model: Arc<ModelLog>,
    messages: Arc<Mutex<Vec<String>>>,
}

fn harness(
    config: Box<dyn ConfigProvider>,
    chat: &'static str,
    replies: Vec<Result<String, GenerateError>>,
    editor: Option<String>,
) -> Harness {
    let (model, model_log) = ScriptedModel::new(replies);
    let (sink, deliveries) = RecordingSink::new();
    let (notifier, messages) = CollectingNotifier::new();

    let controller = SuggestionController::new(
        config,
        Box::new(FixedChat(chat)),
        Box::new(model),
        Box::new(sink),
        Box::new(ScriptedEditor(editor)),
        Box::new(notifier),
        ControllerOptions {
            persona_dir: PathBuf::from("does-not-exist"),
            context_lines: 14,
            example_cap: 8,
        },
    );

    Harness {
        controller,
        deliveries,
        model: model_log,
        messages,
    }
}

#[tokio::test]
async fn accept_pastes_without_send_when_auto_send_off() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi\nhow are you",
        vec![Ok("good, you?".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    assert_eq!(h.controller.state(), LifecycleState::AwaitingDecision);
    assert_eq!(h.controller.pending(), Some("good, you?"));

    h.controller.accept();
    assert_eq!(h.controller.state(), LifecycleState::Idle);

    let deliveries = h.deliveries.lock().unwrap();
    assert_eq!(
        *deliveries,
        vec![Delivery {
            text: "good, you?".to_string(),
            input_box: None,
            auto_send: false,
        }]
    );
}

#[tokio::test]
async fn reject_then_accept_is_a_noop() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![Ok("yo".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.reject();
    assert_eq!(h.controller.state(), LifecycleState::Idle);
    assert_eq!(h.controller.last_suggestion(), None);

    h.controller.accept();
    assert!(h.deliveries.lock().unwrap().is_empty());
    let messages = h.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("No pending suggestion")));
}

#[tokio::test]
async fn second_generate_silently_replaces_pending() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![Ok("first".to_string()), Ok("second".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.generate(Mode::Reply).await;

    assert_eq!(h.controller.pending(), Some("second"));
    h.controller.accept();
    assert_eq!(h.deliveries.lock().unwrap()[0].text, "second");
}

#[tokio::test]
async fn empty_extraction_makes_no_model_call_and_keeps_state() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "",
        vec![Ok("never used".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.controller.state(), LifecycleState::Idle);
    let messages = h.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("No text detected")));
}

#[tokio::test]
async fn generation_error_keeps_prior_suggestion_pending() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![
            Ok("keep me".to_string()),
            Err(GenerateError::Api("boom".to_string())),
        ],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.generate(Mode::Reply).await;

    assert_eq!(h.controller.state(), LifecycleState::AwaitingDecision);
    assert_eq!(h.controller.pending(), Some("keep me"));
    let messages = h.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("API error")));
}

#[tokio::test]
async fn empty_completion_is_reported_not_stored() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![Ok("   ".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    assert_eq!(h.controller.state(), LifecycleState::Idle);
    let messages = h.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("No suggestion generated")));
}

#[tokio::test]
async fn missing_config_aborts_cycle_before_capture() {
    let mut h = harness(
        Box::new(MissingConfig),
        "hi",
        vec![Ok("never".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.controller.state(), LifecycleState::Idle);
    let messages = h.messages.lock().unwrap();
    assert!(messages.iter().any(|m| m.contains("calibrate")));
}

#[tokio::test]
async fn edit_delivers_replacement_and_returns_to_idle() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(true, Some(ScreenPoint { x: 40, y: 60 })))),
        "hi",
        vec![Ok("draft".to_string())],
        Some("my own words".to_string()),
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.edit();

    assert_eq!(h.controller.state(), LifecycleState::Idle);
    let deliveries = h.deliveries.lock().unwrap();
    assert_eq!(
        *deliveries,
        vec![Delivery {
            text: "my own words".to_string(),
            input_box: Some(ScreenPoint { x: 40, y: 60 }),
            auto_send: true,
        }]
    );
    // the generated draft stays around as follow-up context
    assert_eq!(h.controller.last_suggestion(), Some("draft"));
}

#[tokio::test]
async fn cancelled_edit_keeps_suggestion_pending() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![Ok("draft".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.edit();

    assert_eq!(h.controller.state(), LifecycleState::AwaitingDecision);
    assert_eq!(h.controller.pending(), Some("draft"));
    assert!(h.deliveries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn followup_after_accept_embeds_delivered_reply() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![Ok("first draft".to_string()), Ok("more detail".to_string())],
        None,
    );

    h.controller.generate(Mode::Reply).await;
    h.controller.accept();
    h.controller.generate(Mode::Followup).await;

    let prompts = h.model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert!(!prompts[0].contains("Do NOT repeat"));
    assert!(prompts[1].contains("first draft"));
    assert!(prompts[1].contains("Do NOT repeat"));
    assert_eq!(h.controller.pending(), Some("more detail"));
}

#[tokio::test]
async fn decisions_while_idle_report_nothing_pending() {
    let mut h = harness(
        Box::new(FixedConfig(test_config(false, None))),
        "hi",
        vec![],
        Some("unused".to_string()),
    );

    h.controller.accept();
    h.controller.edit();
    h.controller.reject();

    assert!(h.deliveries.lock().unwrap().is_empty());
    let messages = h.messages.lock().unwrap();
    assert_eq!(
        messages
            .iter()
            .filter(|m| m.contains("No pending suggestion") || m.contains("Nothing to reject"))
            .count(),
        3
    );
}
