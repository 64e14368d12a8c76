//! Deterministic collaborators shared by the screen tests.
use alloc::{format, rc::Rc, string::String, vec, vec::Vec};
use core::cell::RefCell;

use super::{MnemonicEntryConfig, RecoverMnemonicScreen};
use crate::entropy::RandomSource;
use crate::error::EntryError;
use crate::ui::data::SortedWordlist;

/// Excerpt of the English BIP-39 list, sorted.
///
/// Only `abandon` starts with `aband`, only `wrong` with `wro` and only `zoo` with `z`.
pub const SAMPLE_WORDS: &[&str] = &[
    "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract", "absurd",
    "abuse", "access", "accident", "account", "act", "action", "legal", "letter", "thank",
    "winner", "wrist", "write", "wrong", "year", "zoo",
];

/// The only phrase accepted by the checker of [`recovery_screen`].
pub const TWELVE_WORD_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon zoo";

/// Replays `bytes` in a loop and records everything fed back into it.
#[derive(Debug)]
pub struct ScriptedSource {
    bytes: Vec<u8>,
    cursor: usize,
    fed: Vec<u8>,
}

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty(), "script needs at least one byte");
        Self {
            bytes: bytes.to_vec(),
            cursor: 0,
            fed: Vec::new(),
        }
    }

    pub fn fed(&self) -> &[u8] {
        &self.fed
    }
}

impl RandomSource for ScriptedSource {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError> {
        for byte in dest.iter_mut() {
            *byte = self.bytes[self.cursor % self.bytes.len()];
            self.cursor += 1;
        }
        Ok(())
    }

    fn feed(&mut self, seed: &[u8]) {
        self.fed.extend_from_slice(seed);
    }
}

/// Yields a fixed budget of zero bytes and fails once it is spent.
#[derive(Debug, Default)]
pub struct FailingSource {
    budget: usize,
}

impl FailingSource {
    /// Nine bytes are exactly one keypad layout.
    pub fn after(budget: usize) -> Self {
        Self { budget }
    }
}

impl RandomSource for FailingSource {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError> {
        if dest.len() > self.budget {
            self.budget = 0;
            return Err(EntryError::EntropyUnavailable);
        }
        self.budget -= dest.len();
        dest.fill(0);
        Ok(())
    }
}

/// Anti-phishing word source that remembers every prefix it was asked about.
///
/// The word for a prefix is `w` followed by the sum of its digits.
#[derive(Clone, Debug, Default)]
pub struct RecordingWords {
    calls: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl RecordingWords {
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.borrow().clone()
    }
}

impl crate::ui::data::PhishingWords for RecordingWords {
    fn word_for(&self, prefix: &[u8]) -> String {
        self.calls.borrow_mut().push(prefix.to_vec());
        let sum: u32 = prefix
            .iter()
            .map(|byte| u32::from(byte.wrapping_sub(b'0')))
            .sum();
        format!("w{sum}")
    }
}

/// Recovery screen over [`SAMPLE_WORDS`] that only accepts [`TWELVE_WORD_PHRASE`].
pub fn recovery_screen() -> RecoverMnemonicScreen {
    RecoverMnemonicScreen::new(MnemonicEntryConfig::default())
        .with_lookup(SortedWordlist::new(SAMPLE_WORDS))
        .with_checker(|phrase: &str| phrase == TWELVE_WORD_PHRASE)
}

/// Generator whose n-th phrase repeats the word `w{n}`.
pub fn counting_generator() -> impl FnMut(usize) -> String + 'static {
    let mut calls = 0usize;
    move |word_count| {
        let phrase = vec![format!("w{calls}"); word_count].join(" ");
        calls += 1;
        phrase
    }
}

#[cfg(test)]
pub fn seeded_source(seed: u64) -> crate::entropy::CryptoRngSource<rand_chacha::ChaCha20Rng> {
    use rand_core::SeedableRng;

    crate::entropy::CryptoRngSource::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed))
}

#[cfg(test)]
pub fn pin_screen() -> super::PinScreen<crate::entropy::CryptoRngSource<rand_chacha::ChaCha20Rng>> {
    match super::PinScreen::new(super::PinScreenConfig::default(), seeded_source(1)) {
        Ok(screen) => screen,
        Err(err) => panic!("seeded source cannot fail: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_words_are_sorted() {
        assert!(SAMPLE_WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn recording_words_track_prefixes() {
        use crate::ui::data::PhishingWords;

        let words = RecordingWords::default();
        assert_eq!(words.word_for(b"12"), "w3");
        assert_eq!(words.clone().word_for(b""), "w0");
        assert_eq!(words.calls(), vec![b"12".to_vec(), Vec::new()]);
    }

    #[test]
    fn failing_source_spends_its_budget() {
        let mut source = FailingSource::after(2);
        let mut buf = [0xffu8; 2];
        assert_eq!(source.fill_random(&mut buf), Ok(()));
        assert_eq!(buf, [0, 0]);
        assert_eq!(
            source.fill_random(&mut buf[..1]),
            Err(EntryError::EntropyUnavailable)
        );
    }
}
