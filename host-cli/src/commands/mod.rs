use std::io::{BufRead, Write};

use futures::executor::block_on;
use futures::future::join;
use keyguard_firmware::ui::{
    ButtonEvent, EntrySession, PendingRequest, SecretScreen, SecretText, labels,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use crate::Command;
use crate::error::SimError;
use crate::render;
use crate::wordlist::Wordlist;

pub mod generate;
pub mod host_config;
pub mod pin;
pub mod recover;

use host_config::HostConfig;

/// Marks a line as a shortcut for a control caption, so that words such as
/// `long` or `back` can still be typed letter by letter.
const ALIAS_PREFIX: char = ':';

/// Keyboard shortcuts for the toolkit's icon captions, without the prefix.
const ALIASES: &[(&str, &str)] = &[
    ("ok", labels::CONFIRM),
    ("reset", labels::RESET),
    ("del", labels::BACKSPACE),
    ("back", labels::BACK),
    ("next", labels::NEXT_WORD),
    ("done", labels::DONE),
    ("continue", labels::NEXT),
    ("long", labels::USE_24_WORDS),
];

/// One simulated button activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Label(String),
    Unlabelled,
}

impl Activation {
    fn event(&self) -> ButtonEvent<'_> {
        match self {
            Activation::Label(label) => ButtonEvent::released(label),
            Activation::Unlabelled => ButtonEvent::unlabelled(),
        }
    }
}

/// Translate one input line into activations.
///
/// `:`-prefixed aliases map to control captions. Runs of letters or digits are
/// typed one key at a time. Anything else is passed through as a caption.
pub fn activations(line: &str) -> Vec<Activation> {
    let line = line.trim();
    if line.is_empty() {
        return vec![Activation::Unlabelled];
    }
    if let Some(label) = alias_label(line) {
        return vec![Activation::Label(String::from(label))];
    }
    if line.chars().all(|c| c.is_ascii_alphanumeric()) {
        return line
            .chars()
            .map(|c| Activation::Label(c.to_string()))
            .collect();
    }
    vec![Activation::Label(String::from(line))]
}

fn alias_label(line: &str) -> Option<&'static str> {
    let name = line.strip_prefix(ALIAS_PREFIX)?;
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, label)| *label)
}

/// Run `screen` against line based input until it resolves or the input ends.
///
/// End of input cancels the request, the same way a watchdog would.
pub fn drive<S, R, W>(screen: S, input: R, output: &mut W) -> Result<Option<S::Output>, SimError>
where
    S: SecretScreen,
    R: BufRead,
    W: Write + ?Sized,
{
    let request = PendingRequest::new();
    let mut session = EntrySession::new(screen, &request);

    let driver = async {
        let result = feed_lines(&mut session, input, output);
        if session.is_open() {
            session.cancel();
        }
        result
    };

    let (outcome, driven) = block_on(join(request.wait(), driver));
    driven?;
    Ok(outcome)
}

fn feed_lines<S, R, W>(
    session: &mut EntrySession<'_, S>,
    input: R,
    output: &mut W,
) -> Result<(), SimError>
where
    S: SecretScreen,
    R: BufRead,
    W: Write + ?Sized,
{
    render::render(&session.render(), output)?;
    for line in input.lines() {
        let line = line?;
        for activation in activations(&line) {
            session.handle_event(&activation.event())?;
            if !session.is_open() {
                return Ok(());
            }
        }
        render::render(&session.render(), output)?;
    }
    log::warn!("input closed before the screen resolved");
    Ok(())
}

pub(crate) fn rng_from_seed(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => {
            log::warn!("using a fixed seed; layouts are reproducible");
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}

pub(crate) fn load_wordlist(config: &HostConfig) -> Result<Option<Wordlist>, SimError> {
    config
        .wordlist
        .as_deref()
        .map(Wordlist::load)
        .transpose()
}

pub fn run<R, W>(
    command: &Command,
    config: &HostConfig,
    seed: Option<u64>,
    input: R,
    output: &mut W,
) -> Result<Option<SecretText>, SimError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    match command {
        Command::Pin => pin::run(config, seed, input, output),
        Command::Recover => recover::run(config, input, output),
        Command::Generate => generate::run(config, seed, input, output),
    }
}
