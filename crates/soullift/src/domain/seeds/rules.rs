//! Rule Tables for the Seed Structural Contract
//!
//! Shared between the instruction builder (which tells the model the
//! rules) and the validator (which checks the model actually followed
//! them). Static and immutable, initialized at module load.

/// Total prompts the instruction asks the model for.
pub const EXPECTED_SEEDS: usize = 8;

/// Of the accepted lines, at least this many must end with "?".
pub const MIN_QUESTIONS: usize = 6;

/// Of the accepted lines, at least this many must be statements.
pub const MIN_STATEMENTS: usize = 2;

/// Word-count bounds per seed, trailing punctuation excluded.
pub const MIN_WORDS: usize = 6;
pub const MAX_WORDS: usize = 10;

/// Sensory words the app never surfaces (case-insensitive substring match).
pub const BANNED_SMELL_WORDS: &[&str] = &["smell", "smells", "scent", "odor", "aroma"];

/// Topics too heavy for a cheer-up gift (case-insensitive substring match).
pub const UNSAFE_TOPICS: &[&str] = &[
    "depression",
    "suicidal",
    "crisis",
    "drinking",
    "drugs",
    "alcohol",
    "substance",
    "address",
    "money",
    "financial",
    "abuse",
    "neglect",
    "dysfunction",
    "difficult times",
    "lowest moments",
];

/// Pronouns the seeds must avoid (whole-word, case-insensitive match).
pub const GENDERED_PRONOUNS: &[&str] = &["he", "she", "him", "her", "his", "hers"];

/// Case-insensitive whole-word search. A match only counts when the
/// needle does not touch an alphanumeric character on either side, so
/// "he" never matches inside "them" or "theme".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    let hay = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = hay[from..].find(&needle) {
        let begin = from + offset;
        let end = begin + needle.len();
        let clear_before = hay[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = hay[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if clear_before && clear_after {
            return true;
        }
        from = end;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_match() {
        assert!(contains_word("How do you cheer her up?", "her"));
        assert!(contains_word("HER favorite song", "her"));
        assert!(contains_word("call her", "her"));
    }

    #[test]
    fn test_no_match_inside_longer_words() {
        assert!(!contains_word("What is your favorite memory with them?", "he"));
        assert!(!contains_word("the theme song you both hum", "he"));
        assert!(!contains_word("their cheerful greeting", "he"));
        assert!(!contains_word("hershey bars", "her"));
    }

    #[test]
    fn test_match_at_line_edges() {
        assert!(contains_word("Sam makes every dinner feel special", "sam"));
        assert!(contains_word("you always think of Sam", "Sam"));
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(!contains_word("anything at all", ""));
    }
}
