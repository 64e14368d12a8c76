use super::{
    input::{ButtonEvent, LabelMap},
    render::ViewContent,
    request::PendingRequest,
};
use crate::error::EntryError;

pub use keypad::{KeypadKey, KeypadLayout, RandomizedKeypad};
pub use mnemonic::generated::{GeneratedMnemonicScreen, RevealConfig};
pub use mnemonic::table::{MAX_WORD_LEN, MAX_WORDS, MnemonicTable, WordTable};
pub use mnemonic::{MnemonicEntryConfig, MnemonicPhase, RecoverMnemonicScreen, ValidationFlags};
pub use pin::{MAX_PIN_DIGITS, PinScreen, PinScreenConfig};

mod keypad;
mod mnemonic;
mod phishing;
mod pin;

/// Outcome of a single screen command.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ScreenEffect<T> {
    #[default]
    None,
    Resolve(T),
    Cancel,
}

/// Screen that collects one secret value and then closes.
pub trait SecretScreen {
    type Command: Copy;
    type Output: Send;

    /// Default mapping from toolkit captions to commands.
    fn labels() -> LabelMap<Self::Command>;

    /// Apply one command.
    ///
    /// Inactive or meaningless commands return [`ScreenEffect::None`]; errors are
    /// reserved for conditions that make the screen unusable.
    fn handle(&mut self, command: Self::Command) -> Result<ScreenEffect<Self::Output>, EntryError>;

    fn render(&self) -> ViewContent;

    /// Overwrite every buffered secret.
    fn wipe(&mut self);
}

/// Apply `command` to `screen` and settle `request` when the screen closes.
///
/// Returns `Ok(true)` once the request has been resolved or cancelled. A screen
/// error cancels the request before it is returned, so the awaiting side is
/// never left suspended.
pub fn dispatch<S: SecretScreen>(
    screen: &mut S,
    command: S::Command,
    request: &PendingRequest<S::Output>,
) -> Result<bool, EntryError> {
    match screen.handle(command) {
        Ok(ScreenEffect::None) => Ok(false),
        Ok(ScreenEffect::Resolve(value)) => {
            screen.wipe();
            request.resolve(value);
            log::info!("secret entry completed");
            Ok(true)
        }
        Ok(ScreenEffect::Cancel) => {
            screen.wipe();
            request.cancel();
            log::info!("secret entry cancelled");
            Ok(true)
        }
        Err(error) => {
            screen.wipe();
            request.cancel();
            log::error!("secret entry aborted: {error}");
            Err(error)
        }
    }
}

/// A screen bound to the request it resolves.
///
/// The session lives on the event handling side; the requester keeps the
/// [`PendingRequest`] and awaits it.
pub struct EntrySession<'r, S: SecretScreen> {
    screen: S,
    labels: LabelMap<S::Command>,
    request: &'r PendingRequest<S::Output>,
}

impl<'r, S: SecretScreen> EntrySession<'r, S> {
    /// Arm `request` and start routing activations to `screen`.
    pub fn new(screen: S, request: &'r PendingRequest<S::Output>) -> Self {
        request.begin_wait();
        log::info!("secret entry session started");
        Self {
            screen,
            labels: S::labels(),
            request,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Access the label map for custom captions.
    pub fn labels_mut(&mut self) -> &mut LabelMap<S::Command> {
        &mut self.labels
    }

    pub fn is_open(&self) -> bool {
        self.request.is_waiting()
    }

    /// Handle a raw toolkit activation.
    ///
    /// Once the request has been settled elsewhere every activation, even a
    /// null one, wipes the screen and reports [`EntryError::ScreenClosed`].
    pub fn handle_event(&mut self, event: &ButtonEvent<'_>) -> Result<(), EntryError> {
        self.ensure_open()?;
        match self.labels.resolve(event) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Apply a command directly, bypassing the label map.
    pub fn apply(&mut self, command: S::Command) -> Result<(), EntryError> {
        self.ensure_open()?;
        dispatch(&mut self.screen, command, self.request).map(|_| ())
    }

    // A watchdog may cancel the request without going through the session.
    fn ensure_open(&mut self) -> Result<(), EntryError> {
        if self.is_open() {
            return Ok(());
        }
        self.screen.wipe();
        Err(EntryError::ScreenClosed)
    }

    /// Close the session with the cancellation sentinel, e.g. from a watchdog.
    pub fn cancel(&mut self) -> bool {
        self.screen.wipe();
        let cancelled = self.request.cancel();
        if cancelled {
            log::info!("secret entry cancelled externally");
        }
        cancelled
    }

    pub fn render(&self) -> ViewContent {
        self.screen.render()
    }
}

impl<S: SecretScreen> Drop for EntrySession<'_, S> {
    fn drop(&mut self) {
        self.screen.wipe();
    }
}

#[cfg(any(test, feature = "ui-tests"))]
pub mod fixtures;
