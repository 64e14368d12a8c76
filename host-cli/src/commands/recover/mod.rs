use std::io::{BufRead, Write};

use keyguard_firmware::ui::{RecoverMnemonicScreen, SecretText};

use super::host_config::{ChecksumMode, HostConfig};
use super::{drive, load_wordlist};
use crate::error::SimError;

pub fn run<R, W>(config: &HostConfig, input: R, output: &mut W) -> Result<Option<SecretText>, SimError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let wordlist = load_wordlist(config)?;
    let mut screen = RecoverMnemonicScreen::new(config.mnemonic_config());

    match (config.checksum, wordlist) {
        (ChecksumMode::Wordlist, None) => {
            return Err(SimError::Config(String::from(
                "checksum mode 'wordlist' needs a wordlist",
            )));
        }
        (ChecksumMode::Wordlist, Some(list)) => {
            let checker = list.clone();
            screen = screen
                .with_lookup(list)
                .with_checker(move |phrase: &str| checker.accepts_phrase(phrase));
        }
        (ChecksumMode::None, Some(list)) => screen = screen.with_lookup(list),
        (ChecksumMode::None, None) => {
            log::warn!("no wordlist configured; autocompletion is disabled");
        }
    }

    writeln!(output, "type letters, ':next', ':del', ':done' or ':back'")?;
    drive(screen, input, output)
}
