use std::io::{BufRead, Write};
use std::time::Instant;

use keyguard_firmware::entropy::CryptoRngSource;
use keyguard_firmware::ui::{PinScreen, SecretText};

use super::host_config::HostConfig;
use super::{drive, load_wordlist, rng_from_seed};
use crate::error::SimError;
use crate::wordlist::PhishingDictionary;

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
    let source = CryptoRngSource::new(rng_from_seed(seed));
    let mut screen = PinScreen::new(config.pin_config(), source)?;
    if seed.is_none() {
        // Press timing is only mixed in when layouts need not be reproducible.
        let started = Instant::now();
        screen = screen.with_clock(move || started.elapsed().as_nanos() as u64);
    }
    if config.anti_phishing {
        let words = load_wordlist(config)?;
        screen = screen.with_phishing_words(PhishingDictionary::new(config.phishing_key(), words));
    }

    writeln!(output, "type digits, ':reset' or ':ok'; one or more keys per line")?;
    drive(screen, input, output)
}
