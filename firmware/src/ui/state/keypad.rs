use heapless::Vec as HeaplessVec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::{RandomSource, draw_index};
use crate::error::EntryError;
use crate::ui::input::labels;

const DIGIT_COUNT: usize = 10;
const GRID_SLOTS: usize = 9;

const DIGIT_LABELS: [&str; DIGIT_COUNT] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Button slot on the PIN keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Reset,
    Confirm,
}

impl KeypadKey {
    pub fn label(self) -> &'static str {
        match self {
            KeypadKey::Digit(digit) => DIGIT_LABELS[usize::from(digit) % DIGIT_COUNT],
            KeypadKey::Reset => labels::RESET,
            KeypadKey::Confirm => labels::CONFIRM,
        }
    }
}

/// Digit placement for one keypad session: a shuffled 3×3 grid plus the leftover digit.
///
/// The bottom row is always `[Reset, leftover, Confirm]`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeypadLayout {
    grid: [u8; GRID_SLOTS],
    leftover: u8,
}

impl KeypadLayout {
    /// Draw a new layout without replacement from the digits `0..=9`.
    ///
    /// The layout only exists once all nine draws succeeded.
    pub fn shuffled<S>(source: &mut S) -> Result<Self, EntryError>
    where
        S: RandomSource + ?Sized,
    {
        let mut remaining: HeaplessVec<u8, DIGIT_COUNT> = (0..DIGIT_COUNT as u8).collect();
        let mut grid = [0u8; GRID_SLOTS];

        for slot in grid.iter_mut() {
            let index = draw_index(source, remaining.len())?;
            *slot = remaining.remove(index);
        }

        Ok(Self {
            grid,
            leftover: remaining[0],
        })
    }

    pub fn leftover(&self) -> u8 {
        self.leftover
    }

    /// Rows in display order, top row first.
    pub fn rows(&self) -> [[KeypadKey; 3]; 4] {
        let digit = |slot: usize| KeypadKey::Digit(self.grid[slot]);
        [
            [digit(0), digit(1), digit(2)],
            [digit(3), digit(4), digit(5)],
            [digit(6), digit(7), digit(8)],
            [
                KeypadKey::Reset,
                KeypadKey::Digit(self.leftover),
                KeypadKey::Confirm,
            ],
        ]
    }
}

/// Keypad whose digit placement is re-drawn for every session and every reset.
pub struct RandomizedKeypad<S> {
    source: S,
    layout: KeypadLayout,
    interactions: u32,
}

impl<S: RandomSource> RandomizedKeypad<S> {
    pub fn new(mut source: S) -> Result<Self, EntryError> {
        let layout = KeypadLayout::shuffled(&mut source)?;
        Ok(Self {
            source,
            layout,
            interactions: 0,
        })
    }

    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Replace the layout. On failure the previous layout is left untouched.
    pub fn reshuffle(&mut self) -> Result<(), EntryError> {
        self.layout = KeypadLayout::shuffled(&mut self.source)?;
        log::debug!("keypad layout regenerated");
        Ok(())
    }

    /// Feed an accepted activation back into the random source.
    ///
    /// `ticks` is the caller's timestamp for the activation; without one only
    /// the running activation count is fed.
    pub fn record_interaction(&mut self, ticks: Option<u64>) {
        self.interactions = self.interactions.wrapping_add(1);
        let mut sample = [0u8; 12];
        sample[..4].copy_from_slice(&self.interactions.to_le_bytes());
        let len = match ticks {
            Some(ticks) => {
                sample[4..].copy_from_slice(&ticks.to_le_bytes());
                sample.len()
            }
            None => 4,
        };
        self.source.feed(&sample[..len]);
    }
}
