use thiserror::Error;

/// Errors surfaced to the firmware code that requested a secret from a screen.
///
/// Invalid or inactive button activations never show up here: screens absorb
/// them and report [`crate::ui::ScreenEffect::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The random source failed to deliver bytes for a keypad layout.
    #[error("random source unavailable")]
    EntropyUnavailable,
    /// A command was delivered to a session whose request already resolved.
    #[error("secret entry session already closed")]
    ScreenClosed,
}
