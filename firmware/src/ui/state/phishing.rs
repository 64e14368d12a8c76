use alloc::{boxed::Box, string::String};
use zeroize::{Zeroize, Zeroizing};

use crate::ui::data::PhishingWords;

/// Running anti-phishing phrase shown above the PIN field.
///
/// Starts with the word for the empty prefix and grows by exactly one word per
/// accepted digit, so the same PIN prefix always shows the same phrase.
pub(crate) struct AntiPhishing {
    source: Box<dyn PhishingWords>,
    words: Zeroizing<String>,
}

impl AntiPhishing {
    pub(crate) fn new(source: Box<dyn PhishingWords>) -> Self {
        let words = Zeroizing::new(source.word_for(b""));
        Self { source, words }
    }

    /// Append the word for the PIN entered so far.
    ///
    /// The longer phrase is built in a fresh allocation of its final size and
    /// the previous one is wiped when it is replaced.
    pub(crate) fn extend(&mut self, prefix: &[u8]) {
        let word = Zeroizing::new(self.source.word_for(prefix));
        let mut words = String::with_capacity(self.words.len() + 1 + word.len());
        words.push_str(&self.words);
        words.push(' ');
        words.push_str(&word);
        self.words = Zeroizing::new(words);
    }

    /// Drop every word derived from digits and show the initial word again.
    pub(crate) fn restart(&mut self) {
        self.words = Zeroizing::new(self.source.word_for(b""));
    }

    pub(crate) fn display(&self) -> &str {
        &self.words
    }

    pub(crate) fn wipe(&mut self) {
        self.words.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::fixtures::RecordingWords;

    #[test]
    fn one_lookup_per_digit() {
        let words = RecordingWords::default();
        let mut feedback = AntiPhishing::new(Box::new(words.clone()));
        feedback.extend(b"1");
        feedback.extend(b"12");

        assert_eq!(
            words.calls(),
            [b"".to_vec(), b"1".to_vec(), b"12".to_vec()]
        );
        assert_eq!(feedback.display(), "w0 w1 w3");
    }

    #[test]
    fn phrase_is_never_grown_in_place() {
        let mut feedback = AntiPhishing::new(Box::new(RecordingWords::default()));
        for prefix in [&b"4"[..], b"45", b"456"] {
            feedback.extend(prefix);
            assert_eq!(feedback.words.capacity(), feedback.words.len());
        }
        assert_eq!(feedback.display(), "w0 w4 w9 w15");
    }

    #[test]
    fn restart_shows_single_initial_word() {
        let words = RecordingWords::default();
        let mut feedback = AntiPhishing::new(Box::new(words.clone()));
        feedback.extend(b"9");
        feedback.restart();
        assert_eq!(feedback.display(), "w0");
    }
}
