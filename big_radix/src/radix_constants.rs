/// Storage type of a single magnitude digit.
pub type Digit = u8;

/// Radix used by [`crate::BigInt`].
pub const DEFAULT_RADIX: Digit = 5;

/// Largest usable radix. Add and shift transiently hold up to `2 * RADIX - 1`
/// in a digit before the carry is resolved.
pub const MAX_RADIX: Digit = Digit::MAX / 2;

/// Smallest usable radix.
pub const MIN_RADIX: Digit = 2;
