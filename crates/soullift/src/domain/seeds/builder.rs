//! Seed Instruction Builder
//!
//! Renders the fixed structural contract plus the writer's context into
//! a single instruction string for the LLM. Pure template fill: no
//! validation, no side effects, deterministic for identical input.

use super::context::SeedContext;
use super::rules::{EXPECTED_SEEDS, MAX_WORDS, MIN_QUESTIONS, MIN_STATEMENTS, MIN_WORDS};

/// Build the LLM instruction that requests a batch of seed prompts.
///
/// Optional context fields are simply omitted from the rendered
/// instruction when absent. An empty `core_feeling` produces a degraded
/// instruction rather than an error; enforcing non-empty input is the
/// caller's contract.
pub fn build_seed_instruction(context: &SeedContext) -> String {
    let mut instruction = format!(
        r#"You are helping someone gather short writing prompts about a person they care for.
Generate exactly {total} prompts that will inspire them to write from the heart.

Requirements:
- Exactly {total} prompts, one prompt per line, nothing else.
- {questions} must be questions ending with "?" and {statements} must be statements.
- Each prompt must be {min}-{max} words long.
- Draw from: unique traits, shared rituals or traditions, memorable moments, how they cheer people up, and small gestures of appreciation.
- Use only the pronouns you/your/they/their. Never use he, she, him, her, his or hers.
- Never mention smell or touch.
- No greetings, numbering or filler.
"#,
        total = EXPECTED_SEEDS,
        questions = MIN_QUESTIONS,
        statements = MIN_STATEMENTS,
        min = MIN_WORDS,
        max = MAX_WORDS,
    );

    if let Some(name) = &context.recipient_name {
        instruction.push_str(&format!(
            "- Include the name \"{}\" in at least two of the {} prompts.\n",
            name, EXPECTED_SEEDS
        ));
    }

    instruction.push_str("\nContext:\n");
    instruction.push_str(&format!("Feeling: {}\n", context.core_feeling));
    if let Some(tone) = &context.tone {
        instruction.push_str(&format!("Tone: {}\n", tone));
    }
    if let Some(recipient) = &context.recipient {
        instruction.push_str(&format!("Recipient: {}\n", recipient));
    }
    if let Some(occasion) = &context.occasion {
        instruction.push_str(&format!("Occasion: {}\n", occasion));
    }
    if let Some(name) = &context.recipient_name {
        instruction.push_str(&format!("Recipient Name: {}\n", name));
    }
    if let Some(age) = context.recipient_age {
        instruction.push_str(&format!("Recipient Age: {}\n", age));
    }
    if let Some(age) = context.writer_age {
        instruction.push_str(&format!("Writer Age: {}\n", age));
    }

    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_context_renders_required_parts() {
        let context = SeedContext {
            core_feeling: "loved".to_string(),
            ..Default::default()
        };
        let instruction = build_seed_instruction(&context);

        assert!(instruction.contains("exactly 8 prompts"));
        assert!(instruction.contains("Feeling: loved"));
        assert!(instruction.contains("6-10 words"));
        assert!(!instruction.contains("Recipient Name:"));
        assert!(!instruction.contains("Tone:"));
    }

    #[test]
    fn test_full_context_renders_every_field() {
        let context = SeedContext {
            core_feeling: "appreciated".to_string(),
            tone: Some("playful".to_string()),
            recipient: Some("Mom".to_string()),
            occasion: Some("birthday".to_string()),
            recipient_name: Some("Sam".to_string()),
            recipient_age: Some(58),
            writer_age: Some(27),
        };
        let instruction = build_seed_instruction(&context);

        assert!(instruction.contains("Feeling: appreciated"));
        assert!(instruction.contains("Tone: playful"));
        assert!(instruction.contains("Recipient: Mom"));
        assert!(instruction.contains("Occasion: birthday"));
        assert!(instruction.contains("Recipient Name: Sam"));
        assert!(instruction.contains("Recipient Age: 58"));
        assert!(instruction.contains("Writer Age: 27"));
        assert!(instruction.contains("Include the name \"Sam\" in at least two of the 8 prompts"));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let context = SeedContext {
            core_feeling: "hopeful".to_string(),
            recipient: Some("grandfather".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_seed_instruction(&context),
            build_seed_instruction(&context)
        );
    }

    #[test]
    fn test_empty_feeling_degrades_without_panicking() {
        let instruction = build_seed_instruction(&SeedContext::default());
        assert!(instruction.contains("Feeling: \n"));
    }
}
