use std::io;
use std::path::PathBuf;

use keyguard_firmware::EntryError;
use thiserror::Error;

/// Failures surfaced by the simulator before or while driving a screen.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid wordlist: {0}")]
    Wordlist(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Entry(#[from] EntryError),
}

impl SimError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
