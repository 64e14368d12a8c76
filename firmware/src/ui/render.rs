use alloc::{string::String, vec::Vec};
use zeroize::Zeroizing;

use super::state::KeypadKey;

/// Content rendered for each secret entry screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewContent {
    Pin(PinView),
    RecoverMnemonic(MnemonicEntryView),
    RevealMnemonic(RevealView),
}

/// Opaque theme style identifier understood by the rendering toolkit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonStyle(pub u8);

/// Released/pressed style pair applied to keypad buttons.
///
/// The pair can only be built with identical members so a touch never
/// produces a visible flash over the touched button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStyles {
    released: ButtonStyle,
    pressed: ButtonStyle,
}

impl ButtonStyles {
    pub const fn uniform(style: ButtonStyle) -> Self {
        Self {
            released: style,
            pressed: style,
        }
    }

    pub const fn released(&self) -> ButtonStyle {
        self.released
    }

    pub const fn pressed(&self) -> ButtonStyle {
        self.pressed
    }
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self::uniform(ButtonStyle::default())
    }
}

/// Shuffled keypad grid, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypadView {
    pub rows: [[KeypadKey; 3]; 4],
    pub styles: ButtonStyles,
}

impl KeypadView {
    /// Button captions in toolkit map order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(|key| key.label()))
            .collect()
    }
}

/// PIN entry screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinView {
    pub title: String,
    pub note: Option<String>,
    /// Number of masked placeholders shown in the password field.
    pub masked_digits: usize,
    pub anti_phishing: Option<String>,
    pub keypad: KeypadView,
}

/// Recovery phrase keyboard screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MnemonicEntryView {
    pub title: String,
    pub words: Zeroizing<Vec<String>>,
    pub next_word_enabled: bool,
    pub done_enabled: bool,
}

/// Freshly generated phrase shown for backup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealView {
    pub title: String,
    pub note: Option<String>,
    pub words: Zeroizing<Vec<String>>,
    pub long_phrase: bool,
}
