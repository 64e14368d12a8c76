//! Random byte sources consumed by the keypad shuffler.
//!
//! The engine never generates randomness itself. Firmware hands in a
//! [`RandomSource`], usually the hardware TRNG wrapped in
//! [`CryptoRngSource`], and the screens draw layout indices from it.
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::EntryError;

/// Upper bound on redraws for a single index before the source is treated as broken.
const MAX_REJECTIONS: usize = 64;

/// Supplier of uniformly random bytes.
pub trait RandomSource {
    /// Fill `dest` with uniformly random bytes.
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError>;

    /// Mix interaction-derived bytes back into the source.
    ///
    /// Sources that cannot absorb entropy ignore the call.
    fn feed(&mut self, _seed: &[u8]) {}
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError> {
        (**self).fill_random(dest)
    }

    fn feed(&mut self, seed: &[u8]) {
        (**self).feed(seed);
    }
}

/// Monotonic tick counter sampled when an activation is accepted.
///
/// The low bits of press timing are hard to predict and are fed back into the
/// [`RandomSource`] before the next reshuffle.
pub trait InteractionClock {
    fn now_ticks(&mut self) -> u64;
}

impl<F: FnMut() -> u64> InteractionClock for F {
    fn now_ticks(&mut self) -> u64 {
        self()
    }
}

const FEED_POOL_LEN: usize = 32;

/// Adapter exposing any cryptographic `rand_core` generator as a [`RandomSource`].
///
/// Fed bytes are folded into a small pool that is XORed over the next fill and
/// then cleared. Independent input cannot bias the generator output.
#[derive(Debug)]
pub struct CryptoRngSource<R> {
    rng: R,
    pool: [u8; FEED_POOL_LEN],
    cursor: usize,
}

impl<R: RngCore + CryptoRng> CryptoRngSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pool: [0; FEED_POOL_LEN],
            cursor: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> RandomSource for CryptoRngSource<R> {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError> {
        self.rng.try_fill_bytes(dest).map_err(|_| {
            log::error!("random source failed to fill buffer");
            EntryError::EntropyUnavailable
        })?;
        for (byte, extra) in dest.iter_mut().zip(self.pool.iter().cycle()) {
            *byte ^= extra;
        }
        self.pool.zeroize();
        self.cursor = 0;
        Ok(())
    }

    fn feed(&mut self, seed: &[u8]) {
        for byte in seed {
            self.pool[self.cursor] ^= byte;
            self.cursor = (self.cursor + 1) % FEED_POOL_LEN;
        }
    }
}

/// Draw an index uniformly from `0..bound`.
///
/// Bytes in the biased tail (`>= 256 - 256 % bound`) are discarded and redrawn.
pub(crate) fn draw_index<S>(source: &mut S, bound: usize) -> Result<usize, EntryError>
where
    S: RandomSource + ?Sized,
{
    if bound <= 1 {
        return Ok(0);
    }
    debug_assert!(bound <= 256, "index bound must fit in one byte");

    let bound = bound as u16;
    let zone = 256 - (256 % bound);
    for _ in 0..MAX_REJECTIONS {
        let mut byte = [0u8; 1];
        source.fill_random(&mut byte)?;
        let value = u16::from(byte[0]);
        if value < zone {
            return Ok(usize::from(value % bound));
        }
    }

    log::error!("random source kept producing rejected samples");
    Err(EntryError::EntropyUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    struct ConstantSource(u8);

    impl RandomSource for ConstantSource {
        fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), EntryError> {
            dest.fill(self.0);
            Ok(())
        }
    }

    #[test]
    fn draws_stay_within_bound() {
        let mut source = CryptoRngSource::new(ChaCha20Rng::seed_from_u64(7));
        for bound in 1..=10 {
            for _ in 0..200 {
                let index = draw_index(&mut source, bound).expect("draw");
                assert!(index < bound);
            }
        }
    }

    #[test]
    fn every_index_is_reachable() {
        let mut source = CryptoRngSource::new(ChaCha20Rng::seed_from_u64(11));
        let mut seen = [false; 10];
        for _ in 0..1_000 {
            seen[draw_index(&mut source, 10).expect("draw")] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn biased_tail_is_rejected() {
        // 255 falls in the discarded tail for a bound of 3 (zone is 0..255).
        let mut stuck = ConstantSource(255);
        assert_eq!(
            draw_index(&mut stuck, 3),
            Err(EntryError::EntropyUnavailable)
        );

        let mut low = ConstantSource(7);
        assert_eq!(draw_index(&mut low, 3), Ok(1));
    }

    #[test]
    fn fed_bytes_are_mixed_into_the_next_fill_only() {
        let mut plain = CryptoRngSource::new(ChaCha20Rng::seed_from_u64(5));
        let mut fed = CryptoRngSource::new(ChaCha20Rng::seed_from_u64(5));
        fed.feed(&[0x11, 0x22, 0x33]);

        let (mut a, mut b) = ([0u8; 6], [0u8; 6]);
        plain.fill_random(&mut a).expect("fill");
        fed.fill_random(&mut b).expect("fill");
        let diff: [u8; 6] = core::array::from_fn(|i| a[i] ^ b[i]);
        assert_eq!(diff, [0x11, 0x22, 0x33, 0, 0, 0]);

        plain.fill_random(&mut a).expect("fill");
        fed.fill_random(&mut b).expect("fill");
        assert_eq!(a, b);
    }

    #[test]
    fn closures_act_as_clocks() {
        let mut ticks = 40u64;
        let mut clock = move || {
            ticks += 2;
            ticks
        };
        assert_eq!(InteractionClock::now_ticks(&mut clock), 42);
        assert_eq!(clock.now_ticks(), 44);
    }

    #[test]
    fn single_slot_needs_no_randomness() {
        let mut stuck = ConstantSource(255);
        assert_eq!(draw_index(&mut stuck, 1), Ok(0));
    }
}
