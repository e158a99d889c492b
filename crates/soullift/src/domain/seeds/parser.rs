//! Raw LLM Output Parser
//!
//! Models are told "no numbering, one prompt per line" but do not
//! always listen. This splits the raw completion text into candidate
//! lines and strips the list decoration models like to add.

/// Split raw LLM output into candidate seed lines.
///
/// Drops empty lines and strips leading numbering ("1.", "2)"),
/// bullets ("-", "*", "•") and surrounding double quotes.
pub fn parse_seed_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(strip_list_markers)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn strip_list_markers(line: &str) -> &str {
    let mut rest = line.trim();

    for marker in ["- ", "* ", "• "] {
        if let Some(stripped) = rest.strip_prefix(marker) {
            rest = stripped.trim_start();
            break;
        }
    }

    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
            rest = stripped.trim_start();
        }
    }

    rest.trim_matches('"').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_pass_through() {
        let raw = "What tradition do you share together?\nTheir kindness never goes unnoticed by anyone\n";
        assert_eq!(
            parse_seed_lines(raw),
            vec![
                "What tradition do you share together?",
                "Their kindness never goes unnoticed by anyone",
            ]
        );
    }

    #[test]
    fn test_strips_numbering_and_bullets() {
        let raw = "1. How do you cheer them up?\n2) Why do they mean so much?\n- Their laughter brightens every single room\n* What tradition do you share together?\n• When did they last surprise you kindly?";
        assert_eq!(
            parse_seed_lines(raw),
            vec![
                "How do you cheer them up?",
                "Why do they mean so much?",
                "Their laughter brightens every single room",
                "What tradition do you share together?",
                "When did they last surprise you kindly?",
            ]
        );
    }

    #[test]
    fn test_strips_surrounding_quotes() {
        assert_eq!(
            parse_seed_lines("\"How do they show you care?\""),
            vec!["How do they show you care?"]
        );
    }

    #[test]
    fn test_drops_blank_lines() {
        assert_eq!(
            parse_seed_lines("\n\nWhy do they mean so much?\n\n"),
            vec!["Why do they mean so much?"]
        );
    }

    #[test]
    fn test_digits_without_list_punctuation_survive() {
        // Only "1." / "1)" style prefixes are treated as numbering.
        assert_eq!(
            parse_seed_lines("7 snacks you always save for them"),
            vec!["7 snacks you always save for them"]
        );
    }
}
