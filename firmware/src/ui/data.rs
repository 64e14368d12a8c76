use alloc::{string::String, vec::Vec};

/// Source of anti-phishing words derived from the PIN entered so far.
///
/// Implementations must be deterministic: the same prefix always yields the same word.
pub trait PhishingWords {
    fn word_for(&self, prefix: &[u8]) -> String;
}

impl<F> PhishingWords for F
where
    F: Fn(&[u8]) -> String,
{
    fn word_for(&self, prefix: &[u8]) -> String {
        self(prefix)
    }
}

/// Wordlist query returning every word that starts with `prefix`.
pub trait WordLookup {
    fn lookup(&self, prefix: &str) -> Vec<String>;
}

impl<F> WordLookup for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn lookup(&self, prefix: &str) -> Vec<String> {
        self(prefix)
    }
}

/// Checksum predicate over a complete, space separated phrase.
pub trait PhraseChecker {
    fn check(&self, phrase: &str) -> bool;
}

impl<F> PhraseChecker for F
where
    F: Fn(&str) -> bool,
{
    fn check(&self, phrase: &str) -> bool {
        self(phrase)
    }
}

/// Generator producing a fresh phrase with the requested number of words.
pub trait MnemonicGenerator {
    fn generate(&mut self, word_count: usize) -> String;
}

impl<F> MnemonicGenerator for F
where
    F: FnMut(usize) -> String,
{
    fn generate(&mut self, word_count: usize) -> String {
        self(word_count)
    }
}

/// [`WordLookup`] over a lexicographically sorted wordlist.
#[derive(Clone, Copy, Debug)]
pub struct SortedWordlist {
    words: &'static [&'static str],
}

impl SortedWordlist {
    /// Wrap a wordlist. The slice must be sorted; lookups binary search it.
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    /// Every word starting with `prefix`, in wordlist order.
    pub fn with_prefix(&self, prefix: &str) -> &'static [&'static str] {
        if prefix.is_empty() {
            return self.words;
        }

        let start = self.words.partition_point(|word| *word < prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|word| word.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }
}

impl WordLookup for SortedWordlist {
    fn lookup(&self, prefix: &str) -> Vec<String> {
        self.with_prefix(prefix)
            .iter()
            .map(|word| String::from(*word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["abandon", "ability", "able", "about", "above", "zoo"];

    #[test]
    fn prefix_query_returns_contiguous_block() {
        let list = SortedWordlist::new(WORDS);
        assert_eq!(list.with_prefix("ab"), &WORDS[..5]);
        assert_eq!(list.with_prefix("abo"), &["about", "above"]);
        assert_eq!(list.with_prefix("zo"), &["zoo"]);
        assert!(list.with_prefix("q").is_empty());
        assert!(list.with_prefix("zoos").is_empty());
    }

    #[test]
    fn empty_prefix_matches_everything() {
        let list = SortedWordlist::new(WORDS);
        assert_eq!(list.lookup("").len(), WORDS.len());
    }

    #[test]
    fn membership_uses_exact_words() {
        let list = SortedWordlist::new(WORDS);
        assert!(list.contains("able"));
        assert!(!list.contains("abl"));
    }
}
