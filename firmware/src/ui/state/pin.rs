use alloc::{boxed::Box, string::String};
use core::mem;

use zeroize::{Zeroize, Zeroizing};

use super::keypad::{KeypadLayout, RandomizedKeypad};
use super::phishing::AntiPhishing;
use super::{ScreenEffect, SecretScreen};
use crate::entropy::{InteractionClock, RandomSource};
use crate::error::EntryError;
use crate::ui::SecretText;
use crate::ui::data::PhishingWords;
use crate::ui::input::{KeypadCommand, LabelMap};
use crate::ui::render::{ButtonStyles, KeypadView, PinView, ViewContent};

/// Captions for the PIN screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinScreenConfig {
    pub title: String,
    pub note: Option<String>,
    /// Theme style applied to keypad buttons in both press states.
    pub styles: ButtonStyles,
}

impl Default for PinScreenConfig {
    fn default() -> Self {
        Self {
            title: String::from("Enter your PIN code"),
            note: None,
            styles: ButtonStyles::default(),
        }
    }
}

/// Longest PIN the buffer holds. Further digits are ignored.
pub const MAX_PIN_DIGITS: usize = 32;

/// Digits entered so far. Only ever appended to or wiped as a whole.
///
/// The backing allocation is sized once so the digits are never copied into a
/// larger buffer behind the zeroizing wrapper.
struct PinBuffer {
    digits: Zeroizing<String>,
}

impl Default for PinBuffer {
    fn default() -> Self {
        Self {
            digits: Zeroizing::new(String::with_capacity(MAX_PIN_DIGITS)),
        }
    }
}

impl PinBuffer {
    /// Returns `false` once the buffer is full.
    fn push(&mut self, digit: char) -> bool {
        if self.digits.len() + digit.len_utf8() > MAX_PIN_DIGITS {
            return false;
        }
        self.digits.push(digit);
        true
    }

    fn clear(&mut self) {
        self.digits.zeroize();
    }

    fn take(&mut self) -> SecretText {
        mem::take(self).digits
    }

    fn as_str(&self) -> &str {
        &self.digits
    }

    fn len(&self) -> usize {
        self.digits.len()
    }
}

/// PIN entry over a randomized keypad with optional anti-phishing words.
pub struct PinScreen<S> {
    config: PinScreenConfig,
    keypad: RandomizedKeypad<S>,
    pin: PinBuffer,
    phishing: Option<AntiPhishing>,
    clock: Option<Box<dyn InteractionClock>>,
}

impl<S: RandomSource> PinScreen<S> {
    /// Build the screen and its first keypad layout.
    ///
    /// Fails before anything can be rendered when `source` cannot shuffle the keypad.
    pub fn new(config: PinScreenConfig, source: S) -> Result<Self, EntryError> {
        let keypad = RandomizedKeypad::new(source).inspect_err(|err| {
            log::error!("pin screen unavailable: {err}");
        })?;

        Ok(Self {
            config,
            keypad,
            pin: PinBuffer::default(),
            phishing: None,
            clock: None,
        })
    }

    /// Show a growing anti-phishing phrase derived from the PIN prefix.
    pub fn with_phishing_words(mut self, words: impl PhishingWords + 'static) -> Self {
        self.phishing = Some(AntiPhishing::new(Box::new(words)));
        self
    }

    /// Timestamp accepted activations and mix the tick count into the random source.
    pub fn with_clock(mut self, clock: impl InteractionClock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn layout(&self) -> &KeypadLayout {
        self.keypad.layout()
    }

    pub fn anti_phishing(&self) -> Option<&str> {
        self.phishing.as_ref().map(AntiPhishing::display)
    }

    pub fn entered_digits(&self) -> usize {
        self.pin.len()
    }

    #[cfg(any(test, feature = "ui-tests"))]
    pub fn pin(&self) -> &str {
        self.pin.as_str()
    }

    /// Returns whether the digit was taken.
    fn append_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || !self.pin.push(digit) {
            return false;
        }
        if let Some(phishing) = self.phishing.as_mut() {
            phishing.extend(self.pin.as_str().as_bytes());
        }
        true
    }

    fn record_interaction(&mut self) {
        let ticks = self.clock.as_mut().map(|clock| clock.now_ticks());
        self.keypad.record_interaction(ticks);
    }

    fn reset(&mut self) -> Result<(), EntryError> {
        self.pin.clear();
        if let Some(phishing) = self.phishing.as_mut() {
            phishing.restart();
        }
        self.keypad.reshuffle()
    }
}

impl<S: RandomSource> SecretScreen for PinScreen<S> {
    type Command = KeypadCommand;
    type Output = SecretText;

    fn labels() -> LabelMap<KeypadCommand> {
        LabelMap::keypad()
    }

    fn handle(&mut self, command: KeypadCommand) -> Result<ScreenEffect<SecretText>, EntryError> {
        match command {
            KeypadCommand::Digit(digit) => {
                if self.append_digit(digit) {
                    self.record_interaction();
                }
                Ok(ScreenEffect::None)
            }
            KeypadCommand::Reset => {
                self.record_interaction();
                self.reset()?;
                Ok(ScreenEffect::None)
            }
            KeypadCommand::Confirm => {
                self.record_interaction();
                Ok(ScreenEffect::Resolve(self.pin.take()))
            }
        }
    }

    fn render(&self) -> ViewContent {
        ViewContent::Pin(PinView {
            title: self.config.title.clone(),
            note: self.config.note.clone(),
            masked_digits: self.pin.len(),
            anti_phishing: self.anti_phishing().map(String::from),
            keypad: KeypadView {
                rows: self.keypad.layout().rows(),
                styles: self.config.styles,
            },
        })
    }

    fn wipe(&mut self) {
        self.pin.clear();
        if let Some(phishing) = self.phishing.as_mut() {
            phishing.wipe();
        }
    }
}
