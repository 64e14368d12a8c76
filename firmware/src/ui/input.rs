use alloc::{string::String, vec::Vec};

/// Button captions shared with the rendering toolkit.
///
/// Glyph labels use the toolkit's private-use symbol code points.
pub mod labels {
    pub const RESET: &str = "\u{f00d}";
    pub const CONFIRM: &str = "\u{f00c}";
    pub const BACKSPACE: &str = "\u{f053}";
    pub const BACK: &str = "\u{f053} Back";
    pub const NEXT_WORD: &str = "Next word";
    pub const DONE: &str = "\u{f00c} Done";
    pub const NEXT: &str = "Next \u{f054}";
    pub const USE_24_WORDS: &str = "Use 24 words";
}

/// Phase of a toolkit button activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Pressed,
    Released,
}

/// Raw activation reported by the toolkit prior to command mapping.
///
/// `label` is `None` when the toolkit could not attribute the touch to a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEvent<'a> {
    pub label: Option<&'a str>,
    pub phase: ButtonPhase,
}

impl<'a> ButtonEvent<'a> {
    /// Convenience constructor for a release on a labelled button.
    pub fn released(label: &'a str) -> Self {
        Self {
            label: Some(label),
            phase: ButtonPhase::Released,
        }
    }

    /// Release that the toolkit could not attribute to any button.
    pub fn unlabelled() -> Self {
        Self {
            label: None,
            phase: ButtonPhase::Released,
        }
    }

    pub fn pressed(label: &'a str) -> Self {
        Self {
            label: Some(label),
            phase: ButtonPhase::Pressed,
        }
    }
}

/// Commands understood by the PIN keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadCommand {
    Digit(char),
    Reset,
    Confirm,
}

/// Commands understood by the recovery phrase keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MnemonicCommand {
    Char(char),
    DeleteChar,
    NextWord,
    Done,
    Abort,
}

/// Commands understood by the generated phrase screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCommand {
    Confirm,
    Back,
    ToggleLength,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Binding<C> {
    label: String,
    command: C,
}

/// Label table describing how toolkit activations translate into screen commands.
///
/// Labels without an explicit binding fall back to a per-screen single
/// character rule (digits on the keypad, letters on the phrase keyboard).
#[derive(Clone, Debug)]
pub struct LabelMap<C> {
    bindings: Vec<Binding<C>>,
    fallback: fn(char) -> Option<C>,
}

impl<C: Copy> LabelMap<C> {
    pub fn new(fallback: fn(char) -> Option<C>) -> Self {
        Self {
            bindings: Vec::new(),
            fallback,
        }
    }

    /// Add or override a custom binding.
    pub fn add_binding(&mut self, label: &str, command: C) {
        if let Some(existing) = self
            .bindings
            .iter_mut()
            .find(|binding| binding.label == label)
        {
            existing.command = command;
        } else {
            self.bindings.push(Binding {
                label: String::from(label),
                command,
            });
        }
    }

    /// Resolve a command for the provided activation.
    ///
    /// Only releases activate a button; presses and unlabelled releases map to nothing.
    pub fn resolve(&self, event: &ButtonEvent<'_>) -> Option<C> {
        if event.phase != ButtonPhase::Released {
            return None;
        }
        let label = event.label?;

        if let Some(binding) = self.bindings.iter().find(|binding| binding.label == label) {
            return Some(binding.command);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => (self.fallback)(c),
            _ => None,
        }
    }
}

impl LabelMap<KeypadCommand> {
    /// Default keypad labels: glyph controls plus one button per digit.
    pub fn keypad() -> Self {
        let mut map = Self::new(|c| c.is_ascii_digit().then_some(KeypadCommand::Digit(c)));
        map.add_binding(labels::RESET, KeypadCommand::Reset);
        map.add_binding(labels::CONFIRM, KeypadCommand::Confirm);
        map
    }
}

impl LabelMap<MnemonicCommand> {
    /// Default phrase keyboard: QWERTY letters, backspace, and the three action buttons.
    pub fn mnemonic() -> Self {
        let mut map =
            Self::new(|c| c.is_ascii_alphabetic().then_some(MnemonicCommand::Char(c)));
        map.add_binding(labels::BACK, MnemonicCommand::Abort);
        map.add_binding(labels::BACKSPACE, MnemonicCommand::DeleteChar);
        map.add_binding(labels::NEXT_WORD, MnemonicCommand::NextWord);
        map.add_binding(labels::DONE, MnemonicCommand::Done);
        map
    }
}

impl LabelMap<RevealCommand> {
    pub fn reveal() -> Self {
        let mut map = Self::new(|_| None);
        map.add_binding(labels::BACK, RevealCommand::Back);
        map.add_binding(labels::NEXT, RevealCommand::Confirm);
        map.add_binding(labels::USE_24_WORDS, RevealCommand::ToggleLength);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_maps_digits_and_controls() {
        let map = LabelMap::keypad();
        assert_eq!(
            map.resolve(&ButtonEvent::released("7")),
            Some(KeypadCommand::Digit('7'))
        );
        assert_eq!(
            map.resolve(&ButtonEvent::released(labels::RESET)),
            Some(KeypadCommand::Reset)
        );
        assert_eq!(
            map.resolve(&ButtonEvent::released(labels::CONFIRM)),
            Some(KeypadCommand::Confirm)
        );
        assert_eq!(map.resolve(&ButtonEvent::released("a")), None);
        assert_eq!(map.resolve(&ButtonEvent::released("12")), None);
    }

    #[test]
    fn presses_and_unlabelled_releases_are_ignored() {
        let map = LabelMap::keypad();
        assert_eq!(map.resolve(&ButtonEvent::pressed("4")), None);
        assert_eq!(map.resolve(&ButtonEvent::unlabelled()), None);
    }

    #[test]
    fn mnemonic_keyboard_keeps_case_for_the_screen() {
        let map = LabelMap::mnemonic();
        assert_eq!(
            map.resolve(&ButtonEvent::released("Q")),
            Some(MnemonicCommand::Char('Q'))
        );
        assert_eq!(
            map.resolve(&ButtonEvent::released(labels::BACK)),
            Some(MnemonicCommand::Abort)
        );
        assert_eq!(
            map.resolve(&ButtonEvent::released(labels::BACKSPACE)),
            Some(MnemonicCommand::DeleteChar)
        );
        assert_eq!(map.resolve(&ButtonEvent::released("3")), None);
    }

    #[test]
    fn custom_binding_overrides_default() {
        let mut map = LabelMap::keypad();
        map.add_binding("OK", KeypadCommand::Confirm);
        map.add_binding(labels::CONFIRM, KeypadCommand::Reset);
        assert_eq!(
            map.resolve(&ButtonEvent::released("OK")),
            Some(KeypadCommand::Confirm)
        );
        assert_eq!(
            map.resolve(&ButtonEvent::released(labels::CONFIRM)),
            Some(KeypadCommand::Reset)
        );
    }
}
