use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One recorded (incoming message, chosen reply) pair used as a few-shot
/// style demonstration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaExample {
    pub user: String,
    pub you: String,
}

/// Load persona examples from the `*.jsonl` files under `dir`, one JSON
/// object per line. Files are visited by filename descending (filenames are
/// the recency proxy, so the latest recording file wins) and at most `cap`
/// examples are returned. Malformed lines are skipped, a missing directory
/// yields no examples.
pub fn load_persona_examples(dir: &Path, cap: usize) -> Vec<PersonaExample> {
    let mut examples = Vec::new();
    if cap == 0 {
        return examples;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("persona dir {} not readable: {e}", dir.display());
            return examples;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "jsonl"))
        .collect();
    files.sort();
    files.reverse();

    for file in files {
        let data = match fs::read_to_string(&file) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("could not read persona file {}: {e}", file.display());
                continue;
            }
        };

        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<PersonaExample>(line) {
                Ok(example) => {
                    examples.push(example);
                    if examples.len() >= cap {
                        return examples;
                    }
                }
                Err(e) => {
                    tracing::debug!("skipping malformed line in {}: {e}", file.display());
                }
            }
        }
    }

    examples
}
