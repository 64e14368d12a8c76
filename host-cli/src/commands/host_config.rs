use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use keyguard_firmware::ui::{MnemonicEntryConfig, PinScreenConfig, RevealConfig};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

const PHISHING_KEY_CONTEXT: &str = "keyguard-sim 2026-10 anti-phishing words";

/// How the recovery screen validates a finished phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumMode {
    /// Accept any phrase; "Done" is always enabled.
    #[default]
    None,
    /// Accept phrases of a standard length made only of wordlist words.
    Wordlist,
}

/// Simulator settings read from an optional JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub wordlist: Option<PathBuf>,
    pub checksum: ChecksumMode,
    pub pin_title: Option<String>,
    pub pin_note: Option<String>,
    pub mnemonic_title: Option<String>,
    pub anti_phishing: bool,
    /// Device secret the anti-phishing words are derived from.
    pub device_secret: Option<String>,
    pub reveal_secrets: bool,
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let raw = fs::read_to_string(path).map_err(|err| SimError::read(path, err))?;
        let config: Self = serde_json::from_str(&raw).map_err(|err| {
            SimError::Config(format!("'{}' is not valid: {err}", path.display()))
        })?;
        log::debug!("loaded simulator configuration from {}", path.display());
        Ok(config)
    }

    pub fn pin_config(&self) -> PinScreenConfig {
        let mut config = PinScreenConfig::default();
        if let Some(title) = &self.pin_title {
            config.title = title.clone();
        }
        config.note = self.pin_note.clone();
        config
    }

    pub fn mnemonic_config(&self) -> MnemonicEntryConfig {
        match &self.mnemonic_title {
            Some(title) => MnemonicEntryConfig {
                title: title.clone(),
            },
            None => MnemonicEntryConfig::default(),
        }
    }

    pub fn reveal_config(&self) -> RevealConfig {
        RevealConfig::default()
    }

    /// Key for the anti-phishing word derivation.
    pub fn phishing_key(&self) -> [u8; 32] {
        let secret = self.device_secret.as_deref().unwrap_or_default();
        blake3::derive_key(PHISHING_KEY_CONTEXT, secret.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sim.json");
        fs::write(&path, json!({ "checksum": "wordlist" }).to_string()).expect("write");

        let config = HostConfig::load(&path).expect("config");
        assert_eq!(config.checksum, ChecksumMode::Wordlist);
        assert_eq!(config.wordlist, None);
        assert!(!config.anti_phishing);
        assert_eq!(config.pin_config().title, "Enter your PIN code");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sim.json");
        fs::write(&path, json!({ "pin_length": 6 }).to_string()).expect("write");

        assert!(matches!(HostConfig::load(&path), Err(SimError::Config(_))));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = HostConfig::load(&path).expect_err("missing file");
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn phishing_key_depends_on_device_secret() {
        let first = HostConfig {
            device_secret: Some(String::from("device-a")),
            ..HostConfig::default()
        };
        let second = HostConfig {
            device_secret: Some(String::from("device-b")),
            ..HostConfig::default()
        };
        assert_ne!(first.phishing_key(), second.phishing_key());
        assert_eq!(first.phishing_key(), first.clone().phishing_key());
    }

    #[test]
    fn titles_override_screen_defaults() {
        let config = HostConfig {
            pin_title: Some(String::from("Unlock")),
            pin_note: Some(String::from("3 attempts left")),
            mnemonic_title: Some(String::from("Restore wallet")),
            ..HostConfig::default()
        };
        let pin = config.pin_config();
        assert_eq!(pin.title, "Unlock");
        assert_eq!(pin.note.as_deref(), Some("3 attempts left"));
        assert_eq!(config.mnemonic_config().title, "Restore wallet");
    }
}
