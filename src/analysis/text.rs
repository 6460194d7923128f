//! Text normalization: lowercase, split into words, keep alphabetic words,
//! drop English stopwords.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// NLTK's English stopword list.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Turn raw text into the token sequence every analysis works on.
///
/// Pure and deterministic. Feeding the output back in (joined by spaces)
/// returns it unchanged.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    tokenize(&lowered)
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
        .filter(|word| !is_stopword(word))
        .map(str::to_string)
        .collect()
}

/// Split on Unicode word boundaries, then peel off English clitics the way a
/// treebank tokenizer does: `"duterte's"` gives `duterte` and `"don't"` gives
/// `do`. The clitic itself is never alphabetic, so it is dropped here.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words().map(|word| {
        if let Some(stem) = word
            .strip_suffix("n't")
            .or_else(|| word.strip_suffix("n’t"))
        {
            return stem;
        }
        match word.find(['\'', '’']) {
            Some(pos) => &word[..pos],
            None => word,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        assert_eq!(
            normalize("Markets rally on good news"),
            vec!["markets", "rally", "good", "news"]
        );
    }

    #[test]
    fn test_drops_numbers_and_punctuation() {
        assert_eq!(
            normalize("Signal No. 3 raised over 12 provinces!!! -- 2024"),
            vec!["signal", "raised", "provinces"]
        );
        assert_eq!(normalize("COVID19 cases"), vec!["cases"]);
    }

    #[test]
    fn test_clitics_are_split() {
        assert_eq!(normalize("Duterte's allies"), vec!["duterte", "allies"]);
        assert_eq!(normalize("Marcos’s visit"), vec!["marcos", "visit"]);
        assert_eq!(normalize("Senators don't agree"), vec!["senators", "agree"]);
        assert_eq!(normalize("They won't budge"), vec!["wo", "budge"]);
    }

    #[test]
    fn test_hyphenated_words_split() {
        assert_eq!(normalize("Typhoon-hit towns"), vec!["typhoon", "hit", "towns"]);
    }

    #[test]
    fn test_non_ascii_letters_kept() {
        assert_eq!(normalize("Parañaque café"), vec!["parañaque", "café"]);
    }

    #[test]
    fn test_empty_and_stopword_only() {
        assert!(normalize("").is_empty());
        assert!(normalize("The and of on it").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Storm hits capital as markets rally on good news";
        assert_eq!(normalize(text), normalize(text));
    }

    #[test]
    fn test_idempotent_on_normalized_tokens() {
        let tokens = normalize("Duterte's allies don't back the 2025 budget, say Senators!");
        let again = normalize(&tokens.join(" "));
        assert_eq!(tokens, again);
    }

    #[test]
    fn test_stopword_list() {
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
        assert!(is_stopword("on"));
        assert!(is_stopword("wouldn't"));
        assert!(!is_stopword("storm"));
    }
}
