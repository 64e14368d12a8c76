//! Secret entry screens.
//!
//! Each screen collects exactly one secret (a PIN or a recovery phrase) and
//! hands it to the firmware code awaiting a [`PendingRequest`]. Screens never
//! draw anything themselves: they translate toolkit button activations into
//! commands and expose a [`ViewContent`] snapshot for the display pipeline, so
//! the whole flow can be exercised in tests without hardware.

mod data;
pub mod input;
pub mod render;
mod request;
mod state;

pub use data::{MnemonicGenerator, PhishingWords, PhraseChecker, SortedWordlist, WordLookup};
pub use input::{
    ButtonEvent, ButtonPhase, KeypadCommand, LabelMap, MnemonicCommand, RevealCommand, labels,
};
pub use render::{
    ButtonStyle, ButtonStyles, KeypadView, MnemonicEntryView, PinView, RevealView, ViewContent,
};
pub use request::PendingRequest;
#[cfg(any(test, feature = "ui-tests"))]
pub use state::fixtures;
pub use state::{
    EntrySession, GeneratedMnemonicScreen, KeypadKey, KeypadLayout, MAX_PIN_DIGITS, MAX_WORD_LEN,
    MAX_WORDS, MnemonicEntryConfig, MnemonicPhase, MnemonicTable, PinScreen, PinScreenConfig,
    RandomizedKeypad, RecoverMnemonicScreen, RevealConfig, ScreenEffect, SecretScreen,
    ValidationFlags, WordTable, dispatch,
};

/// Secret text handed over by a screen; wiped from memory when dropped.
pub type SecretText = zeroize::Zeroizing<alloc::string::String>;
