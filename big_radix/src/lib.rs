//! Big Radix \
//! This crate provides:
//! - [`RadixInt`]: arbitrary-precision signed integers stored as digits of a small radix chosen at compile time.
//! - [`BigInt`]: `RadixInt` in the default radix ([`DEFAULT_RADIX`]).
//!
//! Division is not implemented yet; the division family returns [`Error::Unimplemented`].

mod error;
mod radix_constants;
mod radix_int;

pub use error::{Error, Result};
pub use radix_constants::{Digit, DEFAULT_RADIX, MAX_RADIX, MIN_RADIX};
pub use radix_int::{to_int, BigInt, RadixInt};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a = BigInt::from(9482);
        let b = BigInt::from(18964);
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
        assert_eq!((&a * &b).to_i64(), 179_816_648);
    }
}
