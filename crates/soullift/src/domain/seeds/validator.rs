//! Seed Structural Validator
//!
//! Filters model-generated seed candidates against the structural
//! contract. Filtering, not failure: bad lines are dropped and
//! described, and the caller always receives whatever survived. No
//! rule violation ever raises an error.

use serde::{Deserialize, Serialize};

use super::rules::{
    contains_word, BANNED_SMELL_WORDS, GENDERED_PRONOUNS, MAX_WORDS, MIN_QUESTIONS,
    MIN_STATEMENTS, MIN_WORDS, UNSAFE_TOPICS,
};

/// Outcome of validating one candidate batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedValidation {
    /// Lines that passed every rule, input order preserved.
    pub valid: Vec<String>,
    /// One human-readable diagnostic per violation, in the order found.
    pub issues: Vec<String>,
}

/// Validate a batch of candidate seed lines.
///
/// Per-line rules run in a fixed order and the first failing rule wins:
/// word count, banned sensory words, unsafe topics, gendered pronouns,
/// duplicate of an already-accepted line. A rejected line records
/// exactly one issue. Swapping the order would change which issue is
/// emitted for multi-violation lines, so keep it.
///
/// Question/statement counts and recipient-name hits are tracked for
/// accepted lines only; the aggregate checks append issues after the
/// pass without removing anything from `valid`.
pub fn validate_seeds(prompts: &[String], recipient_name: Option<&str>) -> SeedValidation {
    let mut valid: Vec<String> = Vec::with_capacity(prompts.len());
    let mut issues: Vec<String> = Vec::new();
    let mut accepted_lowercase: Vec<String> = Vec::new();
    let mut questions = 0usize;
    let mut statements = 0usize;
    let mut name_hits = 0usize;

    for prompt in prompts {
        let line = prompt.trim();

        let words = word_count(line);
        if !(MIN_WORDS..=MAX_WORDS).contains(&words) {
            issues.push(format!(
                "\"{}\" has {} words, expected {}-{}",
                line, words, MIN_WORDS, MAX_WORDS
            ));
            continue;
        }

        let lowered = line.to_lowercase();

        if let Some(word) = BANNED_SMELL_WORDS.iter().find(|w| lowered.contains(*w)) {
            issues.push(format!("\"{}\" mentions a banned sensory word \"{}\"", line, word));
            continue;
        }

        if let Some(topic) = UNSAFE_TOPICS.iter().find(|t| lowered.contains(*t)) {
            issues.push(format!("\"{}\" touches an unsafe topic \"{}\"", line, topic));
            continue;
        }

        if let Some(pronoun) = GENDERED_PRONOUNS.iter().find(|p| contains_word(line, p)) {
            issues.push(format!("\"{}\" uses a gendered pronoun \"{}\"", line, pronoun));
            continue;
        }

        if accepted_lowercase.contains(&lowered) {
            issues.push(format!("\"{}\" duplicates an earlier prompt", line));
            continue;
        }
        accepted_lowercase.push(lowered);

        if line.ends_with('?') {
            questions += 1;
        } else {
            statements += 1;
        }
        if let Some(name) = recipient_name {
            if contains_word(line, name) {
                name_hits += 1;
            }
        }

        valid.push(line.to_string());
    }

    if questions < MIN_QUESTIONS {
        issues.push(format!(
            "only {} accepted prompts are questions, expected at least {}",
            questions, MIN_QUESTIONS
        ));
    }
    if statements < MIN_STATEMENTS {
        issues.push(format!(
            "only {} accepted prompts are statements, expected at least {}",
            statements, MIN_STATEMENTS
        ));
    }
    if let Some(name) = recipient_name {
        if name_hits == 0 {
            issues.push(format!("the name \"{}\" was never used in an accepted prompt", name));
        }
    }

    if !issues.is_empty() {
        tracing::warn!(
            accepted = valid.len(),
            issues = issues.len(),
            "seed batch failed structural checks"
        );
    }

    SeedValidation { valid, issues }
}

/// Strip trailing `?`, `.`, `!` then count whitespace-separated tokens.
fn word_count(line: &str) -> usize {
    line.trim_end_matches(['?', '.', '!']).split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn well_formed_batch() -> Vec<String> {
        batch(&[
            "What is your favorite memory with them?",
            "How do you cheer them up?",
            "What tradition do you share together?",
            "When did they last surprise you kindly?",
            "Why do they mean so much?",
            "How do they show you care?",
            "Their laughter brightens every single room",
            "Their kindness never goes unnoticed by anyone",
        ])
    }

    #[test]
    fn test_well_formed_batch_all_accepted() {
        let prompts = well_formed_batch();
        let result = validate_seeds(&prompts, None);

        assert_eq!(result.valid, prompts);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_name_never_used_is_the_only_issue() {
        // 6 questions, 2 statements, nothing banned - but no line
        // mentions Sam, so exactly one aggregate issue appears.
        let prompts = well_formed_batch();
        let result = validate_seeds(&prompts, Some("Sam"));

        assert_eq!(result.valid.len(), 8);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("Sam"));
        assert!(result.issues[0].contains("never used"));
    }

    #[test]
    fn test_name_hit_is_whole_word_and_case_insensitive() {
        let mut prompts = well_formed_batch();
        prompts[6] = "Dinner with sam always feels like home".to_string();
        let result = validate_seeds(&prompts, Some("Sam"));

        assert_eq!(result.valid.len(), 8);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_word_count_bounds() {
        let prompts = batch(&[
            "Too short to keep?",
            "This one runs far too long to ever fit the window at all",
        ]);
        let result = validate_seeds(&prompts, None);

        assert!(result.valid.is_empty());
        assert!(result.issues[0].contains("has 4 words"));
        assert!(result.issues[1].contains("has 13 words"));
    }

    #[test]
    fn test_trailing_punctuation_excluded_from_word_count() {
        // 6 words once the trailing "?" is stripped.
        let prompts = batch(&["How do they show you care?"]);
        let result = validate_seeds(&prompts, None);
        assert_eq!(result.valid.len(), 1);
    }

    #[test]
    fn test_first_failing_rule_records_one_issue() {
        // Word count passes (7 words), then the sensory-word rule fires
        // before the pronoun rule ever runs: one issue, not two.
        let prompts = batch(&["He always smells like fresh cut grass"]);
        let result = validate_seeds(&prompts, None);

        assert!(result.valid.is_empty());
        let line_issues: Vec<_> = result
            .issues
            .iter()
            .filter(|i| i.contains("fresh cut grass"))
            .collect();
        assert_eq!(line_issues.len(), 1);
        assert!(line_issues[0].contains("sensory word"));
    }

    #[test]
    fn test_word_count_rule_precedes_banned_words() {
        let prompts = batch(&["He smells bad"]);
        let result = validate_seeds(&prompts, None);
        assert!(result.issues[0].contains("has 3 words"));
    }

    #[test]
    fn test_unsafe_topic_rejected() {
        let prompts = batch(&["Remember the difficult times you shared together"]);
        let result = validate_seeds(&prompts, None);

        assert!(result.valid.is_empty());
        assert!(result.issues[0].contains("unsafe topic"));
        assert!(result.issues[0].contains("difficult times"));
    }

    #[test]
    fn test_gendered_pronoun_rejected_whole_word_only() {
        let prompts = batch(&[
            "His generosity always makes everyone feel welcome",
            "The theme song you both hum together",
        ]);
        let result = validate_seeds(&prompts, None);

        // "His" is a whole-word hit; "theme" containing "he" is not.
        assert_eq!(result.valid.len(), 1);
        assert!(result.issues[0].contains("gendered pronoun"));
    }

    #[test]
    fn test_duplicates_rejected_case_insensitively() {
        let prompts = batch(&[
            "Why do they mean so much?",
            "WHY DO THEY MEAN SO MUCH?",
        ]);
        let result = validate_seeds(&prompts, None);

        assert_eq!(result.valid.len(), 1);
        assert!(result.issues.iter().any(|i| i.contains("duplicates")));
    }

    #[test]
    fn test_valid_is_order_preserving_subset() {
        let prompts = batch(&[
            "What is your favorite memory with them?",
            "bad",
            "How do you cheer them up?",
            "Their laughter brightens every single room",
        ]);
        let result = validate_seeds(&prompts, None);

        assert_eq!(
            result.valid,
            vec![
                "What is your favorite memory with them?",
                "How do you cheer them up?",
                "Their laughter brightens every single room",
            ]
        );
    }

    #[test]
    fn test_aggregate_shortfalls_reported_without_removing_lines() {
        let prompts = batch(&[
            "Their laughter brightens every single room",
            "Their kindness never goes unnoticed by anyone",
        ]);
        let result = validate_seeds(&prompts, None);

        assert_eq!(result.valid.len(), 2);
        assert!(result
            .issues
            .iter()
            .any(|i| i.contains("only 0 accepted prompts are questions")));
        // Statement minimum is met, so no statement issue.
        assert!(!result.issues.iter().any(|i| i.contains("are statements")));
    }

    #[test]
    fn test_idempotent_on_own_valid_output() {
        let prompts = batch(&[
            "What is your favorite memory with them?",
            "He smells bad",
            "How do you cheer them up?",
            "What tradition do you share together?",
            "When did they last surprise you kindly?",
            "Why do they mean so much?",
            "How do they show you care?",
            "Their laughter brightens every single room",
            "Their kindness never goes unnoticed by anyone",
        ]);
        let first = validate_seeds(&prompts, Some("Sam"));
        let second = validate_seeds(&first.valid, Some("Sam"));

        assert_eq!(first.valid, second.valid);
        // No structural issues remain; only the aggregate name issue.
        assert!(second
            .issues
            .iter()
            .all(|i| i.contains("never used")));
    }

    #[test]
    fn test_empty_input_reports_aggregates_only() {
        let result = validate_seeds(&[], None);

        assert!(result.valid.is_empty());
        assert_eq!(result.issues.len(), 2);
    }
}
