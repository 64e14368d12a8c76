//! Wordlist loaded from disk, used for lookups, checksum checks, phrase
//! generation and anti-phishing words.
use std::fs;
use std::path::Path;
use std::rc::Rc;

use keyguard_firmware::ui::{PhishingWords, WordLookup};
use rand_core::RngCore;

use crate::error::SimError;

/// Phrase lengths accepted by [`Wordlist::accepts_phrase`].
pub const PHRASE_LENGTHS: [usize; 5] = [12, 15, 18, 21, 24];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wordlist {
    words: Rc<[String]>,
}

impl Wordlist {
    /// Read one word per line. Blank lines are skipped; words are lowercased and sorted.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let raw = fs::read_to_string(path).map_err(|err| SimError::read(path, err))?;
        let list = Self::parse(&raw)?;
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn parse(raw: &str) -> Result<Self, SimError> {
        let mut words = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(SimError::Wordlist(format!(
                    "line {} contains a non-letter word",
                    index + 1
                )));
            }
            words.push(word.to_ascii_lowercase());
        }
        if words.is_empty() {
            return Err(SimError::Wordlist(String::from("no words found")));
        }

        words.sort_unstable();
        words.dedup();
        Ok(Self {
            words: words.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    pub fn with_prefix(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|word| word.as_str() < prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|word| word.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }

    /// Stand-in for a real checksum: a standard length made only of known words.
    pub fn accepts_phrase(&self, phrase: &str) -> bool {
        let words: Vec<&str> = phrase.split(' ').collect();
        PHRASE_LENGTHS.contains(&words.len()) && words.iter().all(|word| self.contains(word))
    }

    /// Pick `count` words uniformly at random.
    pub fn generate<R: RngCore + ?Sized>(&self, rng: &mut R, count: usize) -> String {
        let bound = self.words.len() as u32;
        let zone = u32::MAX - (u32::MAX % bound);
        let mut picked = Vec::with_capacity(count);
        while picked.len() < count {
            let value = rng.next_u32();
            if value < zone {
                picked.push(self.words[(value % bound) as usize].as_str());
            }
        }
        picked.join(" ")
    }
}

impl WordLookup for Wordlist {
    fn lookup(&self, prefix: &str) -> Vec<String> {
        self.with_prefix(prefix).to_vec()
    }
}

/// Anti-phishing words keyed by a per-device secret.
///
/// Without a wordlist the word is a short hex tag of the keyed hash.
pub struct PhishingDictionary {
    key: [u8; 32],
    words: Option<Wordlist>,
}

impl PhishingDictionary {
    pub fn new(key: [u8; 32], words: Option<Wordlist>) -> Self {
        Self { key, words }
    }
}

impl PhishingWords for PhishingDictionary {
    fn word_for(&self, prefix: &[u8]) -> String {
        let hash = blake3::keyed_hash(&self.key, prefix);
        let bytes = hash.as_bytes();
        match &self.words {
            Some(list) => {
                let index = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
                list.words[index % list.len()].clone()
            }
            None => format!("{:02x}{:02x}", bytes[0], bytes[1]),
        }
    }
}
