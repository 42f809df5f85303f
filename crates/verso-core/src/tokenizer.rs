use std::collections::BTreeSet;

/// Characters stripped from both ends of a raw token
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '«', '»'];

/// Tokens with fewer characters than this are not vocabulary
const MIN_WORD_CHARS: usize = 3;

/// Extract the sorted set of candidate vocabulary words from lyric lines.
///
/// Lines are split on whitespace, edge punctuation is stripped, the rest is
/// lowercased. Punctuation inside a word (hyphens, apostrophes) is kept.
pub fn extract_unique_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = BTreeSet::new();

    for line in lines {
        for raw in line.as_ref().split_whitespace() {
            let cleaned = raw.trim_matches(EDGE_PUNCTUATION).to_lowercase();
            if cleaned.chars().count() >= MIN_WORD_CHARS {
                words.insert(cleaned);
            }
        }
    }

    words.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupes_and_sorts() {
        let words = extract_unique_words(["Hola, hola!", "Qué día"]);
        assert_eq!(words, vec!["día", "hola", "qué"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_unique_words(Vec::<String>::new()).is_empty());
        assert!(extract_unique_words(["", "   "]).is_empty());
    }

    #[test]
    fn test_short_and_punctuation_only_tokens_are_dropped() {
        let words = extract_unique_words(["yo y tú... «» !!! él"]);
        assert!(words.is_empty());
    }

    #[test]
    fn test_strips_only_edge_punctuation() {
        let words = extract_unique_words(["«Corazón-roto», 'dímelo' \"AMOR\"?"]);
        assert_eq!(words, vec!["amor", "corazón-roto", "dímelo"]);
    }

    #[test]
    fn test_lowercases_accented_letters() {
        let words = extract_unique_words(["ÁRBOL Árbol árbol ÑANDÚ"]);
        assert_eq!(words, vec!["árbol", "ñandú"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "día" is four bytes but three characters
        assert_eq!(extract_unique_words(["día"]), vec!["día"]);
        // "né" is three bytes but two characters
        assert!(extract_unique_words(["né"]).is_empty());
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        let words = extract_unique_words(["(bailando) sol-"]);
        assert_eq!(words, vec!["(bailando)", "sol-"]);
    }
}
