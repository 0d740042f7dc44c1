/// The multiplier applied to the low half of the first lane on each step.
pub const LANE1_MULTIPLIER: i32 = 10007;
/// The multiplier applied to the low half of the second lane on each step.
pub const LANE2_MULTIPLIER: i32 = 44701;
/// Selects the low 16 bits of a lane.
pub const LOW_MASK: i32 = 0xFFFF;
/// The largest output we're willing to allocate in one call.
pub const MAX_GENERATE_LEN: usize = i16::MAX as usize;
/// The number of bytes in an identifier seed.
pub const SEED_LEN: usize = 16;
// Ticks are 100ns intervals counted from 0001-01-01T00:00:00Z.
/// The tick count at the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;
/// The number of nanoseconds in one tick.
pub const NANOS_PER_TICK: u128 = 100;
