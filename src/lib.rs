//! A small, reproducible pseudo-random mixer.
//!
//! A [`Mixer`] turns a seed into a deterministic stream of 32-bit words and
//! bytes, for things like salts and nonces that must be derived again later.
//! It is not a cryptographically secure generator, and shouldn't be used to
//! create long term keys.
mod clock;
mod constants;
mod error;
mod rng;
mod seed;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::MAX_GENERATE_LEN;
pub use error::Error;
pub use rng::Mixer;
pub use seed::Seed;
