//! Recovery phrase entry with wordlist autocompletion and checksum gating.
use alloc::{boxed::Box, string::String};

use zeroize::Zeroizing;

use super::{ScreenEffect, SecretScreen};
use crate::error::EntryError;
use crate::ui::SecretText;
use crate::ui::data::{PhraseChecker, WordLookup};
use crate::ui::input::{LabelMap, MnemonicCommand};
use crate::ui::render::{MnemonicEntryView, ViewContent};

pub mod generated;
pub mod table;

use table::{MnemonicTable, WordTable};

/// "Next word" stays disabled until the typed prefix has at least this many letters.
const MIN_AUTOCOMPLETE_PREFIX: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MnemonicEntryConfig {
    pub title: String,
}

impl Default for MnemonicEntryConfig {
    fn default() -> Self {
        Self {
            title: String::from("Enter your recovery phrase"),
        }
    }
}

/// Which keyboard actions are currently available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationFlags {
    pub autocomplete_enabled: bool,
    pub completion_enabled: bool,
}

/// Progress of the phrase being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MnemonicPhase {
    Entering { word_index: usize, partial_len: usize },
    WordBoundary { word_index: usize },
    ReadyToFinish,
    Resolved,
}

/// Keyboard screen collecting a recovery phrase one word at a time.
///
/// Without a lookup "Next word" never activates. Without a checker "Done" is
/// always enabled and the caller is trusted to validate the phrase itself.
pub struct RecoverMnemonicScreen {
    config: MnemonicEntryConfig,
    table: Box<dyn MnemonicTable>,
    lookup: Option<Box<dyn WordLookup>>,
    checker: Option<Box<dyn PhraseChecker>>,
    flags: ValidationFlags,
    candidate: SecretText,
    resolved: bool,
}

impl RecoverMnemonicScreen {
    pub fn new(config: MnemonicEntryConfig) -> Self {
        Self {
            config,
            table: Box::new(WordTable::new()),
            lookup: None,
            checker: None,
            flags: ValidationFlags {
                autocomplete_enabled: false,
                completion_enabled: true,
            },
            candidate: SecretText::default(),
            resolved: false,
        }
    }

    pub fn with_table(mut self, table: impl MnemonicTable + 'static) -> Self {
        self.table = Box::new(table);
        self.reset_flags();
        self
    }

    pub fn with_lookup(mut self, lookup: impl WordLookup + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self.reset_flags();
        self
    }

    pub fn with_checker(mut self, checker: impl PhraseChecker + 'static) -> Self {
        self.checker = Some(Box::new(checker));
        self.reset_flags();
        self
    }

    pub fn flags(&self) -> ValidationFlags {
        self.flags
    }

    pub fn words(&self) -> &[String] {
        self.table.words()
    }

    /// Phrase that "Done" would submit right now.
    pub fn candidate_phrase(&self) -> &str {
        &self.candidate
    }

    pub fn phase(&self) -> MnemonicPhase {
        if self.resolved {
            return MnemonicPhase::Resolved;
        }
        if self.checker.is_some() && self.flags.completion_enabled {
            return MnemonicPhase::ReadyToFinish;
        }

        let words = self.table.words();
        let word_index = words.len().saturating_sub(1);
        let partial_len = self.table.last_word().chars().count();
        if partial_len == 0 && word_index > 0 {
            MnemonicPhase::WordBoundary { word_index }
        } else {
            MnemonicPhase::Entering {
                word_index,
                partial_len,
            }
        }
    }

    fn reset_flags(&mut self) {
        self.flags = ValidationFlags {
            autocomplete_enabled: false,
            completion_enabled: self.checker.is_none(),
        };
    }

    fn autocomplete(&mut self) {
        let Some(lookup) = self.lookup.as_ref() else {
            return;
        };
        let word = Zeroizing::new(String::from(self.table.last_word()));
        if word.chars().count() < MIN_AUTOCOMPLETE_PREFIX {
            return;
        }
        let candidates = Zeroizing::new(lookup.lookup(&word));
        if let [candidate] = candidates.as_slice() {
            self.table.autocomplete_word(candidate);
        }
    }

    /// Recompute the action flags and the phrase "Done" would submit.
    fn refresh(&mut self) {
        let mut phrase = Zeroizing::new(self.table.mnemonic());
        let mut autocomplete_enabled = false;

        if let Some(lookup) = self.lookup.as_ref() {
            let word = self.table.last_word();
            let candidates = Zeroizing::new(lookup.lookup(word));
            autocomplete_enabled =
                word.chars().count() >= MIN_AUTOCOMPLETE_PREFIX && candidates.len() == 1;
            if let [candidate] = candidates.as_slice() {
                phrase = substitute_last_word(self.table.words(), candidate);
            }
        }

        let checked = SecretText::new(String::from(phrase.trim()));
        let completion_enabled = match self.checker.as_ref() {
            Some(checker) => checker.check(&checked),
            None => true,
        };

        self.flags = ValidationFlags {
            autocomplete_enabled,
            completion_enabled,
        };
        self.candidate = checked;
    }
}

/// The phrase is allocated at its final length so it is never copied while it grows.
fn substitute_last_word(words: &[String], replacement: &str) -> Zeroizing<String> {
    let kept = &words[..words.len().saturating_sub(1)];
    let len = kept.iter().map(|word| word.len() + 1).sum::<usize>() + replacement.len();
    let mut phrase = Zeroizing::new(String::with_capacity(len));
    for word in kept {
        phrase.push_str(word);
        phrase.push(' ');
    }
    phrase.push_str(replacement);
    phrase
}

impl SecretScreen for RecoverMnemonicScreen {
    type Command = MnemonicCommand;
    type Output = SecretText;

    fn labels() -> LabelMap<MnemonicCommand> {
        LabelMap::mnemonic()
    }

    fn handle(&mut self, command: MnemonicCommand) -> Result<ScreenEffect<SecretText>, EntryError> {
        if self.resolved {
            return Err(EntryError::ScreenClosed);
        }

        match command {
            MnemonicCommand::Abort => {
                self.resolved = true;
                return Ok(ScreenEffect::Cancel);
            }
            MnemonicCommand::DeleteChar => self.table.del_char(),
            MnemonicCommand::NextWord => {
                if self.flags.autocomplete_enabled {
                    self.autocomplete();
                }
            }
            MnemonicCommand::Done => {
                if !self.flags.completion_enabled {
                    return Ok(ScreenEffect::None);
                }
                self.refresh();
                if self.flags.completion_enabled {
                    self.resolved = true;
                    return Ok(ScreenEffect::Resolve(self.candidate.clone()));
                }
            }
            MnemonicCommand::Char(c) => self.table.add_char(c.to_ascii_lowercase()),
        }

        self.refresh();
        Ok(ScreenEffect::None)
    }

    fn render(&self) -> ViewContent {
        ViewContent::RecoverMnemonic(MnemonicEntryView {
            title: self.config.title.clone(),
            words: Zeroizing::new(self.table.words().to_vec()),
            next_word_enabled: self.flags.autocomplete_enabled,
            done_enabled: self.flags.completion_enabled,
        })
    }

    fn wipe(&mut self) {
        self.table.clear();
        self.candidate = SecretText::default();
    }
}
