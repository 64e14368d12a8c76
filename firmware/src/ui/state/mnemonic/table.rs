use alloc::{string::String, vec::Vec};

use zeroize::{Zeroize, Zeroizing};

/// Longest phrase the table accepts.
pub const MAX_WORDS: usize = 24;
/// Longest word the table accepts; no BIP-39 word is longer.
pub const MAX_WORD_LEN: usize = 8;

/// Storage for the words of a phrase being typed or displayed.
///
/// The last word is the one being edited; earlier words only change when a
/// backspace crosses the boundary back into them.
pub trait MnemonicTable {
    fn add_char(&mut self, c: char);

    /// Remove one character, stepping back into the previous word when the current one is empty.
    fn del_char(&mut self);

    /// Replace the word being edited with `word` and start the next one.
    fn autocomplete_word(&mut self, word: &str);

    fn last_word(&self) -> &str;

    fn words(&self) -> &[String];

    /// Space separated phrase, possibly ending with a partial or empty word.
    fn mnemonic(&self) -> String {
        self.words().join(" ")
    }

    fn set_mnemonic(&mut self, phrase: &str);

    /// Wipe every word.
    fn clear(&mut self);
}

/// In-memory [`MnemonicTable`] that zeroizes its words when they are dropped or replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordTable {
    words: Zeroizing<Vec<String>>,
}

/// Words are allocated at full size up front so typing never reallocates them.
fn empty_word() -> String {
    String::with_capacity(MAX_WORD_LEN)
}

impl WordTable {
    pub fn new() -> Self {
        let mut words = Vec::with_capacity(MAX_WORDS);
        words.push(empty_word());
        Self {
            words: Zeroizing::new(words),
        }
    }

    fn current(&mut self) -> &mut String {
        if self.words.is_empty() {
            self.words.push(empty_word());
        }
        let last = self.words.len() - 1;
        &mut self.words[last]
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MnemonicTable for WordTable {
    fn add_char(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        let word = self.current();
        if word.len() < MAX_WORD_LEN {
            word.push(c);
        }
    }

    fn del_char(&mut self) {
        if self.current().pop().is_some() {
            return;
        }
        if self.words.len() > 1 {
            self.words.pop();
        }
    }

    fn autocomplete_word(&mut self, word: &str) {
        let current = self.current();
        current.zeroize();
        current.push_str(word);
        if self.words.len() < MAX_WORDS {
            self.words.push(empty_word());
        }
    }

    fn last_word(&self) -> &str {
        self.words.last().map(String::as_str).unwrap_or_default()
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    fn set_mnemonic(&mut self, phrase: &str) {
        self.words.zeroize();
        self.words.extend(
            phrase
                .split_whitespace()
                .take(MAX_WORDS)
                .map(String::from),
        );
        if self.words.is_empty() {
            self.words.push(empty_word());
        }
    }

    fn clear(&mut self) {
        self.words.zeroize();
        self.words.push(empty_word());
    }
}
