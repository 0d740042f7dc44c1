use log::{debug, trace};
use rand_core::{impls, RngCore};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::clock::{Clock, SystemClock};
use crate::constants::{LANE1_MULTIPLIER, LANE2_MULTIPLIER, LOW_MASK, MAX_GENERATE_LEN};
use crate::error::Error;
use crate::seed::Seed;

/// A deterministic two lane pseudo-random generator.
///
/// The output is entirely determined by the seed: two mixers built from the
/// same seed yield the same stream of words forever. This makes it useful for
/// deriving salts or nonces that must be reproduced later, but it is not a
/// cryptographically secure generator. Its state is only 64 bits, and it can
/// be recovered from a handful of outputs.
///
/// Every constructor advances the state once before returning, so the first
/// word handed out is never the raw seed material.
///
/// A mixer mutates itself on every draw. Share one between threads only
/// behind a lock, or give each thread its own.
#[derive(Clone)]
pub struct Mixer {
    lane1: i32,
    lane2: i32,
}

impl Mixer {
    /// Create a mixer from a `Uuid`, using its GUID byte layout.
    ///
    /// This fails with [`Error::InvalidSeed`] for the nil `Uuid`.
    pub fn from_uuid(id: Uuid) -> Result<Self, Error> {
        let seed = Seed::from(id);
        Self::from_seed(&seed)
    }

    /// Create a mixer from a raw 128-bit identifier.
    ///
    /// The even bytes are xored into the first lane, and the odd bytes are
    /// anded into the second. Since the second lane starts at zero, it stays
    /// zero, and the whole stream ends up depending on a single byte of the
    /// identifier. This weak mixing is kept as is, because existing streams
    /// depend on it. Prefer [`Mixer::new`] with an explicit seed when
    /// compatibility doesn't matter.
    ///
    /// This fails with [`Error::InvalidSeed`] if the identifier is all zero.
    pub fn from_seed(seed: &Seed) -> Result<Self, Error> {
        if seed.is_zero() {
            return Err(Error::InvalidSeed);
        }
        let mut lane1 = 0i32;
        let mut lane2 = 0i32;
        for pair in seed.as_bytes().chunks_exact(2) {
            lane1 ^= i32::from(pair[0]);
            lane2 &= i32::from(pair[1]);
        }
        trace!("mixer seeded from identifier");
        Ok(Self::shuffled(lane1, lane2))
    }

    /// Create a mixer from a 64-bit seed, or from the system clock if absent.
    ///
    /// Only an explicit seed gives a reproducible stream.
    pub fn new(seed: Option<i64>) -> Self {
        Self::with_clock(seed, &SystemClock)
    }

    /// Like [`Mixer::new`], but reading ticks from `clock` when no seed is given.
    pub fn with_clock(seed: Option<i64>, clock: &impl Clock) -> Self {
        let value = match seed {
            Some(value) => {
                trace!("mixer seeded from integer");
                value
            }
            None => {
                debug!("no seed supplied, seeding mixer from clock");
                clock.ticks()
            }
        };
        Self::permuted(value)
    }

    /// Create a mixer from a 32-bit seed.
    ///
    /// Zero is not a seed: it means "no seed", and reads the system clock.
    pub(crate) fn from_i32(seed: i32) -> Self {
        Self::from_i32_with_clock(seed, &SystemClock)
    }

    pub(crate) fn from_i32_with_clock(seed: i32, clock: &impl Clock) -> Self {
        if seed == 0 {
            debug!("zero seed supplied, seeding mixer from clock");
            return Self::permuted(clock.ticks());
        }
        let a = Zeroizing::new(seed.to_le_bytes());
        let lane1 = i32::from(i16::from_le_bytes([a[0], a[1]]));
        let lane2 = i32::from(i16::from_le_bytes([a[2], a[3]]));
        trace!("mixer seeded from 32-bit integer");
        Self::shuffled(lane1, lane2)
    }

    /// Spread the bytes of a 64-bit value across both lanes.
    fn permuted(value: i64) -> Self {
        let t = Zeroizing::new(value.to_le_bytes());
        let x = Zeroizing::new([t[4], t[6], t[0], t[2]]);
        let y = Zeroizing::new([t[7], t[1], t[4], t[3]]);
        Self::shuffled(i32::from_le_bytes(*x), i32::from_le_bytes(*y))
    }

    fn shuffled(lane1: i32, lane2: i32) -> Self {
        let mut out = Self { lane1, lane2 };
        out.step();
        out
    }

    fn step(&mut self) -> i32 {
        // Both updates wrap at 32 bits; the stream depends on it.
        self.lane1 = LANE1_MULTIPLIER
            .wrapping_mul(self.lane1 & LOW_MASK)
            .wrapping_add(self.lane1 >> 16);
        self.lane2 = LANE2_MULTIPLIER
            .wrapping_mul(self.lane2 & LOW_MASK)
            .wrapping_add(self.lane2 << 16);
        self.lane1 ^ self.lane2
    }

    /// Advance the state, returning the next word.
    ///
    /// With `positive_only`, the absolute value of the word is returned
    /// instead. `i32::MIN` has no positive counterpart, and maps to
    /// `i32::MAX`, so the result is never negative.
    pub fn next(&mut self, positive_only: bool) -> i32 {
        let word = self.step();
        if positive_only {
            word.saturating_abs()
        } else {
            word
        }
    }

    /// Advance the state, returning the next signed word.
    pub fn next_i32(&mut self) -> i32 {
        self.next(false)
    }

    /// Advance the state, returning the next word as a non-negative value.
    pub fn next_positive(&mut self) -> i32 {
        self.next(true)
    }

    /// Fill `dest` with bytes from the stream.
    ///
    /// Each group of 4 bytes is the little endian encoding of one word, with
    /// the last word truncated if needed. An empty buffer leaves the state
    /// untouched.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut word = Zeroizing::new([0u8; 4]);
        for chunk in dest.chunks_mut(4) {
            *word = self.next_i32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    /// Allocate `len` bytes from the stream, as with [`Mixer::fill_bytes`].
    ///
    /// `len` must be between 1 and [`MAX_GENERATE_LEN`], inclusive.
    pub fn generate_bytes(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        if !(1..=MAX_GENERATE_LEN).contains(&len) {
            return Err(Error::OutOfRange(len));
        }
        let mut out = vec![0u8; len];
        self.fill_bytes(&mut out);
        Ok(out)
    }

    /// Derive a new mixer from the next word of this one.
    ///
    /// The child is reproducible from the parent's seed, except when the
    /// drawn word happens to be zero, in which case it is seeded from the
    /// clock.
    pub fn fork(&mut self) -> Mixer {
        Mixer::from_i32(self.next_i32())
    }
}

impl RngCore for Mixer {
    fn next_u32(&mut self) -> u32 {
        self.next_i32() as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Mixer::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Mixer::fill_bytes(self, dest);
        Ok(())
    }
}
