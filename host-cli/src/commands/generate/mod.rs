use std::io::{BufRead, Write};

use keyguard_firmware::ui::{GeneratedMnemonicScreen, SecretText};

use super::host_config::HostConfig;
use super::{drive, load_wordlist, rng_from_seed};
use crate::error::SimError;

pub fn run<R, W>(
    config: &HostConfig,
    seed: Option<u64>,
    input: R,
    output: &mut W,
) -> Result<Option<SecretText>, SimError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let Some(list) = load_wordlist(config)? else {
        return Err(SimError::Config(String::from(
            "generating a phrase needs a wordlist",
        )));
    };

    let mut rng = rng_from_seed(seed);
    let generator = move |count: usize| list.generate(&mut rng, count);
    let screen = GeneratedMnemonicScreen::new(config.reveal_config(), generator);

    writeln!(output, "type ':continue', ':long' or ':back'")?;
    drive(screen, input, output)
}
