#![cfg_attr(not(test), no_std)]

//! Secret entry engine for hardware wallet screens.
//!
//! See [`ui`] for the screens and [`entropy`] for the randomness they consume.

extern crate alloc;

pub mod entropy;
pub mod error;
pub mod ui;

pub use error::EntryError;
