use std::ops::Range;

/// Strips qualifier tokens ("chronic", "type 2", ...) from disease names to
/// get the canonical term consumer-health sources actually index.
///
/// Tokens are applied in list order; each removes at most its leftmost
/// case-insensitive, word-bounded occurrence. A hyphen gluing the token to
/// the previous word ("drug-resistant") goes with it.
#[derive(Debug, Clone)]
pub struct NameSimplifier {
    tokens: Vec<String>,
}

impl NameSimplifier {
    pub fn new(tokens: Vec<String>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn simplify(&self, name: &str) -> String {
        let mut current = name.to_string();

        for token in &self.tokens {
            if let Some(range) = find_word(&current, token) {
                let mut start = range.start;
                if start > 0 && current.as_bytes()[start - 1] == b'-' {
                    start -= 1;
                }
                current.replace_range(start..range.end, " ");
            }
        }

        let collapsed = current.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            name.trim().to_string()
        } else {
            collapsed
        }
    }
}

/// Leftmost word-bounded occurrence of an already lower-cased `token`.
fn find_word(haystack: &str, token: &str) -> Option<Range<usize>> {
    let step = token.chars().next()?.len_utf8();
    // ASCII lowering keeps byte offsets identical to `haystack`.
    let lower = haystack.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    let mut from = 0;

    while let Some(pos) = lower[from..].find(token) {
        let start = from + pos;
        let end = start + token.len();
        let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let after_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return Some(start..end);
        }
        from = start + step;
    }

    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simplifier() -> NameSimplifier {
        NameSimplifier::new(
            [
                "resistant",
                "refractory",
                "type 1",
                "type 2",
                "chronic",
                "acute",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }

    #[test]
    fn test_removes_type_qualifier() {
        assert_eq!(simplifier().simplify("type 2 diabetes mellitus"), "diabetes mellitus");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(simplifier().simplify("Type 1 Diabetes Mellitus"), "Diabetes Mellitus");
        assert_eq!(simplifier().simplify("CHRONIC Bronchitis"), "Bronchitis");
    }

    #[test]
    fn test_each_token_removed_once_leftmost() {
        assert_eq!(
            simplifier().simplify("acute on chronic acute liver failure"),
            "on acute liver failure"
        );
    }

    #[test]
    fn test_multiple_tokens_in_order() {
        assert_eq!(
            simplifier().simplify("refractory chronic migraine"),
            "migraine"
        );
    }

    #[test]
    fn test_respects_word_boundaries() {
        assert_eq!(simplifier().simplify("type 10 disorder"), "type 10 disorder");
        assert_eq!(simplifier().simplify("chronicity syndrome"), "chronicity syndrome");
    }

    #[test]
    fn test_hyphenated_qualifier() {
        assert_eq!(
            simplifier().simplify("drug-resistant tuberculosis"),
            "drug tuberculosis"
        );
    }

    #[test]
    fn test_name_made_only_of_qualifiers_is_kept() {
        assert_eq!(simplifier().simplify("  Chronic "), "Chronic");
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(
            simplifier().simplify("maladie de Ménière chronic"),
            "maladie de Ménière"
        );
    }

    #[test]
    fn test_blank_tokens_ignored() {
        let s = NameSimplifier::new(vec!["".into(), "  ".into(), "Acute".into()]);
        assert_eq!(s.tokens(), &["acute".to_string()]);
    }
}
