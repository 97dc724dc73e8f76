use std::io::{self, Write};

use wingman_core::ports::{Notifier, SuggestionEditor};
use wingman_io::HotkeyAction;

/// Console toast surface. The bell gives an audible cue so the operator can
/// stay in the chat window; suppressed when stdout is not a terminal.
pub struct ConsoleNotifier {
    bell: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            bell: atty::is(atty::Stream::Stdout),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn suggestion(&self, text: &str) {
        if self.bell {
            print!("\x07");
        }
        println!("\n[SUGGESTION] {text}\n");
        println!(
            "Press {} to Accept, {} to Edit, {} to Reject.",
            HotkeyAction::Accept.chord(),
            HotkeyAction::Edit.chord(),
            HotkeyAction::Reject.chord()
        );
        let _ = io::stdout().flush();
    }

    fn info(&self, message: &str) {
        println!("[INFO] {message}");
    }

    fn warn(&self, message: &str) {
        if self.bell {
            print!("\x07");
        }
        println!("[WARN] {message}");
        let _ = io::stdout().flush();
    }
}

/// Console edit flow: show the draft, read one replacement line from stdin,
/// blank input cancels. The operator alt-tabs over from the chat window.
pub struct ConsoleEditor;

impl SuggestionEditor for ConsoleEditor {
    fn revise(&mut self, current: &str) -> Option<String> {
        println!("\n[EDIT] Current suggestion:\n{current}");
        print!("\nType your edited message (leave blank to cancel): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return None;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

pub fn print_banner() {
    println!(
        "[READY] Press {} to suggest a reply, {} for a follow-up.",
        HotkeyAction::GenerateReply.chord(),
        HotkeyAction::GenerateFollowup.chord()
    );
    println!(
        "[READY] Then: {}=Accept  {}=Edit  {}=Reject",
        HotkeyAction::Accept.chord(),
        HotkeyAction::Edit.chord(),
        HotkeyAction::Reject.chord()
    );
    println!("[NOTE] Nothing is typed until you accept. Region and input box come from the calibrated config.\n");
}
