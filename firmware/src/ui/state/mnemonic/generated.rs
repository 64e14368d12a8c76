use alloc::{boxed::Box, string::String};

use zeroize::Zeroizing;

use super::table::{MnemonicTable, WordTable};
use crate::error::EntryError;
use crate::ui::SecretText;
use crate::ui::data::MnemonicGenerator;
use crate::ui::input::{LabelMap, RevealCommand};
use crate::ui::render::{RevealView, ViewContent};
use crate::ui::state::{ScreenEffect, SecretScreen};

const SHORT_PHRASE_WORDS: usize = 12;
const LONG_PHRASE_WORDS: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    pub title: String,
    pub note: Option<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            title: String::from("Your recovery phrase:"),
            note: Some(String::from("Write it down and never show to anybody")),
        }
    }
}

/// Shows a freshly generated phrase for backup and hands it over on confirmation.
pub struct GeneratedMnemonicScreen {
    config: RevealConfig,
    generator: Box<dyn MnemonicGenerator>,
    table: WordTable,
    long_phrase: bool,
}

impl GeneratedMnemonicScreen {
    pub fn new(config: RevealConfig, generator: impl MnemonicGenerator + 'static) -> Self {
        let mut screen = Self {
            config,
            generator: Box::new(generator),
            table: WordTable::new(),
            long_phrase: false,
        };
        screen.regenerate();
        screen
    }

    pub fn word_count(&self) -> usize {
        if self.long_phrase {
            LONG_PHRASE_WORDS
        } else {
            SHORT_PHRASE_WORDS
        }
    }

    pub fn words(&self) -> &[String] {
        self.table.words()
    }

    fn regenerate(&mut self) {
        let phrase = Zeroizing::new(self.generator.generate(self.word_count()));
        self.table.set_mnemonic(&phrase);
    }
}

impl SecretScreen for GeneratedMnemonicScreen {
    type Command = RevealCommand;
    type Output = SecretText;

    fn labels() -> LabelMap<RevealCommand> {
        LabelMap::reveal()
    }

    fn handle(&mut self, command: RevealCommand) -> Result<ScreenEffect<SecretText>, EntryError> {
        match command {
            RevealCommand::Back => Ok(ScreenEffect::Cancel),
            RevealCommand::Confirm => Ok(ScreenEffect::Resolve(SecretText::new(
                self.table.mnemonic(),
            ))),
            RevealCommand::ToggleLength => {
                self.long_phrase = !self.long_phrase;
                self.regenerate();
                Ok(ScreenEffect::None)
            }
        }
    }

    fn render(&self) -> ViewContent {
        ViewContent::RevealMnemonic(RevealView {
            title: self.config.title.clone(),
            note: self.config.note.clone(),
            words: Zeroizing::new(self.table.words().to_vec()),
            long_phrase: self.long_phrase,
        })
    }

    fn wipe(&mut self) {
        self.table.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::fixtures::counting_generator;

    #[test]
    fn starts_with_twelve_words() {
        let screen = GeneratedMnemonicScreen::new(RevealConfig::default(), counting_generator());
        assert_eq!(screen.words().len(), 12);
        assert_eq!(screen.words()[0], "w0");
    }

    #[test]
    fn toggle_regenerates_with_twenty_four_words() {
        let mut screen =
            GeneratedMnemonicScreen::new(RevealConfig::default(), counting_generator());
        screen.handle(RevealCommand::ToggleLength).expect("toggle");
        assert_eq!(screen.words().len(), 24);
        assert_eq!(screen.words()[0], "w1");

        screen.handle(RevealCommand::ToggleLength).expect("toggle");
        assert_eq!(screen.words().len(), 12);
        assert_eq!(screen.words()[0], "w2");
    }

    #[test]
    fn confirm_returns_displayed_phrase() {
        let mut screen =
            GeneratedMnemonicScreen::new(RevealConfig::default(), counting_generator());
        let expected = screen.words().join(" ");
        match screen.handle(RevealCommand::Confirm) {
            Ok(ScreenEffect::Resolve(phrase)) => assert_eq!(phrase.as_str(), expected),
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn back_cancels() {
        let mut screen =
            GeneratedMnemonicScreen::new(RevealConfig::default(), counting_generator());
        assert_eq!(screen.handle(RevealCommand::Back), Ok(ScreenEffect::Cancel));
    }
}
