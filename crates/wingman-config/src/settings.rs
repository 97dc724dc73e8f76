use std::env;
use std::path::PathBuf;

use wingman_core::prompt::{DEFAULT_CONTEXT_LINES, DEFAULT_EXAMPLE_CAP};

/// Runtime settings, environment-driven with per-field defaults. `.env` is
/// loaded by the binaries before this is read.
pub struct Settings {
    /// Gemini API key; generation refuses to run without it.
    pub api_key: String,
    pub model_name: String,
    pub region_file: PathBuf,
    pub persona_dir: PathBuf,
    /// OCR language passed to tesseract.
    pub ocr_lang: String,
    /// Explicit tesseract binary path, when not on PATH.
    pub tesseract_path: Option<String>,
    /// Upper bound on the model round trip.
    pub timeout_seconds: u64,
    pub context_lines: usize,
    pub example_cap: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let model_name =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let region_file = env::var("REGION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("region.json"));

        let persona_dir = env::var("PERSONA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("persona_samples"));

        let ocr_lang = env::var("OCR_LANG").unwrap_or_else(|_| "eng".to_string());

        let tesseract_path = env::var("TESSERACT_PATH").ok().filter(|p| !p.is_empty());

        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let context_lines = env::var("CONTEXT_LINES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONTEXT_LINES);

        let example_cap = env::var("MAX_PERSONA_EXAMPLES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EXAMPLE_CAP);

        Settings {
            api_key,
            model_name,
            region_file,
            persona_dir,
            ocr_lang,
            tesseract_path,
            timeout_seconds,
            context_lines,
            example_cap,
        }
    }
}
