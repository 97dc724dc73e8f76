use wingman_types::Mode;

use crate::persona::PersonaExample;

pub const DEFAULT_CONTEXT_LINES: usize = 14;
pub const DEFAULT_EXAMPLE_CAP: usize = 8;

/// Fixed persona/system instruction: tone, scope and output format.
const SYSTEM_INSTRUCTION: &str = "You are drafting chat replies in the operator's own voice: casual, \
concise and natural, with emoji only where the conversation genuinely calls for it. \
Reply only to the most recent message from the other person. \
If names appear in the conversation, use them to personalize the reply. \
Respond with exactly one message, without any speaker label or name prefix, \
and do not repeat earlier content unless explicitly asked to.";

const FOLLOWUP_INSTRUCTION: &str = "The previous reply felt insufficient. Continue the same thought briefly, \
adding the missing clarity or value. Do NOT repeat the previous text verbatim. \
Previous reply was:";

/// Keep only the last `limit` non-blank lines of the recognized chat text,
/// trimmed, in their original order.
pub fn trim_context(chat_text: &str, limit: usize) -> String {
    let lines: Vec<&str> = chat_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(limit);
    lines[start..].join("\n")
}

/// Assemble the full model prompt. Pure and deterministic: persona
/// instruction, few-shot examples, the follow-up block when extending a
/// prior suggestion, then the trimmed chat context and the closing cue.
pub fn build_prompt(
    chat_context: &str,
    examples: &[PersonaExample],
    mode: Mode,
    last_suggestion: Option<&str>,
) -> String {
    let mut prompt = String::from(SYSTEM_INSTRUCTION);

    prompt.push_str("\n\nExamples:\n");
    for example in examples {
        prompt.push_str("User says: ");
        prompt.push_str(&example.user);
        prompt.push_str("\nYou reply: ");
        prompt.push_str(&example.you);
        prompt.push_str("\n---\n");
    }

    if mode == Mode::Followup {
        prompt.push('\n');
        prompt.push_str(FOLLOWUP_INSTRUCTION);
        prompt.push('\n');
        prompt.push_str(last_suggestion.unwrap_or_default());
        prompt.push_str("\n---\n");
    }

    prompt.push_str("\nChat context:\n");
    prompt.push_str(chat_context);
    prompt.push_str("\nYour next reply:");
    prompt
}
