//! Tag input normalization.

/// Split a comma-separated tag string into clean tokens.
///
/// Tokens are trimmed, empty tokens are dropped, and duplicates keep their
/// first occurrence so input order is preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if out.iter().any(|t| t == token) {
            continue;
        }
        out.push(token.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(parse_tags("folk, nature ,tribal"), vec!["folk", "nature", "tribal"]);
    }

    #[test]
    fn drops_empty_tokens() {
        assert_eq!(parse_tags("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_tags(",, ,"), Vec::<String>::new());
        assert_eq!(parse_tags(""), Vec::<String>::new());
    }

    #[test]
    fn dedupes_preserving_first_occurrence() {
        assert_eq!(parse_tags("sun,moon,sun,stars,moon"), vec!["sun", "moon", "stars"]);
        // Duplicates are detected after trimming.
        assert_eq!(parse_tags("sun,  sun  "), vec!["sun"]);
    }
}
