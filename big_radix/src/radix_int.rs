//! # RadixInt
//! Arbitrary-precision signed integers whose magnitude is stored as digits of a small radix,
//! least significant digit first, next to a sign flag.
//!
//! Arithmetic is deliberately simple: schoolbook add/subtract with carry and borrow,
//! binary shifts emulated by doubling/halving every digit, and multiplication by
//! double-and-add over the binary expansion of the multiplicand.
//! # Example
//! ```
//! use big_radix::BigInt;
//!
//! let a = BigInt::from(9482);
//! let b = BigInt::from(18964);
//! let c = &a * &b;
//! println!("a * b = {}", c);
//! assert_eq!(c.to_i64(), 9482 * 18964);
//! assert!(BigInt::from(-9482) < BigInt::from(-1));
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Index, Neg,
};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::radix_constants::*;

/// Signed integer stored in base `RADIX`.
///
/// The value is always kept canonical: at least one digit, no most-significant zero digits,
/// and zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RadixInt<const RADIX: Digit> {
    /// `true` for non-negative values.
    sign: bool,
    digits: Vec<Digit>,
}

/// [`RadixInt`] in the default radix.
pub type BigInt = RadixInt<DEFAULT_RADIX>;

// 实现构造
impl<const RADIX: Digit> RadixInt<RADIX> {
    const RADIX_IN_RANGE: () = assert!(
        RADIX >= MIN_RADIX && RADIX <= MAX_RADIX,
        "RADIX must lie between 2 and Digit::MAX / 2"
    );

    /// The radix this type stores its digits in.
    pub const BASE: Digit = RADIX;

    fn new(mut digits: Vec<Digit>, sign: bool) -> Self {
        let () = Self::RADIX_IN_RANGE;
        if digits.is_empty() {
            digits.push(0);
        }
        let mut num = RadixInt { sign, digits };
        num.fix_zero_sign();
        num
    }

    pub fn zero() -> Self {
        RadixInt::new(vec![0], true)
    }

    pub fn one() -> Self {
        RadixInt::new(vec![1], true)
    }

    /// Decomposes `val` into digits by repeated division by the radix.
    fn value_of(mut val: u64, sign: bool) -> Self {
        let radix = RADIX as u64;
        let mut digits = Vec::new();
        if val < radix {
            digits.push(val as Digit);
        } else {
            while val != 0 {
                digits.push((val % radix) as Digit);
                val /= radix;
            }
        }
        RadixInt::new(digits, sign)
    }

    /// Resets to zero.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.digits.push(0);
        self.sign = true;
    }

    /// Drops most-significant zero digits, always keeping at least one digit.
    pub fn trim(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self.fix_zero_sign();
    }

    /// Appends `zeroes` zero digits at the most significant end.
    fn pad(&mut self, zeroes: usize) {
        self.digits.resize(self.digits.len() + zeroes, 0);
    }

    fn fix_zero_sign(&mut self) {
        if self.is_zero() {
            self.sign = true;
        }
    }
}

macro_rules! impl_unsigned_to_radix_int {
    ($($u: ty),*) => {
    $(
    impl<const RADIX: Digit> From<$u> for RadixInt<RADIX> {
        fn from(val: $u) -> Self {
            RadixInt::value_of(val as u64, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_radix_int {
    ($($i: ty),*) => {
    $(
    impl<const RADIX: Digit> From<$i> for RadixInt<RADIX> {
        fn from(val: $i) -> Self {
            RadixInt::value_of(val.unsigned_abs() as u64, val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_radix_int!(u8, u16, u32, usize, u64);
impl_signed_to_radix_int!(i8, i16, i32, isize, i64);

impl<const RADIX: Digit> Default for RadixInt<RADIX> {
    fn default() -> Self {
        RadixInt::zero()
    }
}

// 实现转换
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Sums `digit[i] * RADIX^i` back into an `i64`.
    ///
    /// This is lossy: magnitudes beyond the `i64` range wrap modulo 2^64 and no overflow
    /// is reported. Every value constructed from an `i64` converts back exactly.
    pub fn to_i64(&self) -> i64 {
        let radix = RADIX as i64;
        let mut res: i64 = 0;
        let mut pow: i64 = 1;
        for &digit in &self.digits {
            res = res.wrapping_add((digit as i64).wrapping_mul(pow));
            pow = pow.wrapping_mul(radix);
        }
        if self.sign {
            res
        } else {
            res.wrapping_neg()
        }
    }
}

impl<const RADIX: Digit> From<&RadixInt<RADIX>> for i64 {
    fn from(num: &RadixInt<RADIX>) -> Self {
        num.to_i64()
    }
}

/// Lossy conversion of `num` to `i64`, see [`RadixInt::to_i64`].
pub fn to_int<const RADIX: Digit>(num: &RadixInt<RADIX>) -> i64 {
    num.to_i64()
}

// 访问器
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// `true` when the value is non-negative.
    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    fn is_positive(&self) -> bool {
        self.sign && !self.is_zero()
    }

    /// Number of stored digits.
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty() || (self.digits.len() == 1 && self.digits[0] == 0)
    }

    /// Parity of the value. With an odd radix every digit contributes to the parity,
    /// with an even radix only the least significant one does.
    pub fn is_odd(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        if RADIX & 0x01 == 1 {
            self.digits.iter().fold(false, |odd, digit| odd ^ (digit & 0x01 == 1))
        } else {
            self.digits[0] & 0x01 == 1
        }
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }
}

impl<const RADIX: Digit> Index<usize> for RadixInt<RADIX> {
    type Output = Digit;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.digits.len(),
            "digit index {} out of range for a value with {} digits",
            index,
            self.digits.len()
        );
        &self.digits[index]
    }
}

// 实现打印
impl<const RADIX: Digit> Display for RadixInt<RADIX> {
    /// Sign character followed by the digits, most significant first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(if self.sign { '+' } else { '-' })?;
        for digit in self.digits.iter().rev() {
            write!(f, " {}", digit)?;
        }
        Ok(())
    }
}

impl<const RADIX: Digit> RadixInt<RADIX> {
    pub fn print(&self) {
        println!("{}", self);
    }
}

// 实现大小比较
impl<const RADIX: Digit> RadixInt<RADIX> {
    fn compare_mag(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl<const RADIX: Digit> PartialOrd for RadixInt<RADIX> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const RADIX: Digit> Ord for RadixInt<RADIX> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.compare_mag(other),
            // both negative: the larger magnitude is the lesser value
            (false, false) => self.compare_mag(other).reverse(),
        }
    }
}

// 实现取反和绝对值
impl<const RADIX: Digit> Neg for RadixInt<RADIX> {
    type Output = RadixInt<RADIX>;

    fn neg(self) -> Self::Output {
        let RadixInt { sign, digits } = self;
        RadixInt::new(digits, !sign)
    }
}

impl<const RADIX: Digit> Neg for &RadixInt<RADIX> {
    type Output = RadixInt<RADIX>;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl<const RADIX: Digit> RadixInt<RADIX> {
    pub fn abs(&self) -> RadixInt<RADIX> {
        RadixInt { sign: true, digits: self.digits.clone() }
    }
}

// 实现加法
impl<const RADIX: Digit> RadixInt<RADIX> {
    fn add_impl(&self, addend: &Self) -> Self {
        if addend.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return addend.clone();
        }
        if self.sign != addend.sign {
            return self.sub_impl(&-addend);
        }

        let (big, small) = if self.digits.len() >= addend.digits.len() {
            (self, addend)
        } else {
            (addend, self)
        };
        let mut digits = Vec::with_capacity(big.digits.len() + 1);
        let mut carry = 0;
        for (i, &digit) in big.digits.iter().enumerate() {
            let mut sum = digit + small.digits.get(i).copied().unwrap_or(0) + carry;
            if sum >= RADIX {
                sum -= RADIX;
                carry = 1;
            } else {
                carry = 0;
            }
            digits.push(sum);
        }
        if carry != 0 {
            digits.push(carry);
        }

        RadixInt::new(digits, self.sign)
    }
}

// 实现减法
impl<const RADIX: Digit> RadixInt<RADIX> {
    fn sub_impl(&self, subtrahend: &Self) -> Self {
        if subtrahend.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -subtrahend;
        }
        if self.sign != subtrahend.sign {
            return self.add_impl(&-subtrahend);
        }
        if self.compare_mag(subtrahend) == Ordering::Less {
            return -subtrahend.sub_impl(self);
        }

        // |self| >= |subtrahend| from here on, so the final borrow is always zero
        let mut digits = Vec::with_capacity(self.digits.len());
        let mut borrow: i16 = 0;
        for (i, &digit) in self.digits.iter().enumerate() {
            let mut diff = digit as i16
                - subtrahend.digits.get(i).copied().unwrap_or(0) as i16
                - borrow;
            if diff < 0 {
                diff += RADIX as i16;
                borrow = 1;
            } else {
                borrow = 0;
            }
            digits.push(diff as Digit);
        }

        let mut res = RadixInt { sign: self.sign, digits };
        res.trim();
        res
    }
}

// 实现自增自减
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Prefix increment: adds one and returns the updated value.
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Postfix increment: adds one and returns the value from before the update.
    pub fn post_inc(&mut self) -> Self {
        let old = self.clone();
        *self += 1;
        old
    }

    /// Prefix decrement: subtracts one and returns the updated value.
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Postfix decrement: subtracts one and returns the value from before the update.
    pub fn post_dec(&mut self) -> Self {
        let old = self.clone();
        *self -= 1;
        old
    }
}

// 实现左移
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Multiplies the magnitude by two, one digit at a time.
    fn double(&mut self) {
        let mut carry = 0;
        for digit in self.digits.iter_mut() {
            *digit = (*digit << 1) + carry;
            if *digit >= RADIX {
                *digit -= RADIX;
                carry = 1;
            } else {
                carry = 0;
            }
        }
        if carry != 0 {
            self.pad(1);
            let last = self.digits.len() - 1;
            self.digits[last] = carry;
        }
    }

    /// Binary shift left: doubles the value `count` times. A non-positive count is a no-op.
    fn shl_impl(&self, count: &Self) -> Self {
        trace!("shl {} by {}", self, count);
        let mut res = self.clone();
        let mut remaining = count.clone();
        while remaining.is_positive() {
            res.double();
            remaining.dec();
        }
        res
    }
}

// 实现右移
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Halves the magnitude, truncating. An odd digit lends `RADIX` to the digit below it.
    fn halve(&mut self) {
        let mut borrow = 0;
        for digit in self.digits.iter_mut().rev() {
            *digit += borrow;
            borrow = (*digit & 0x01) * RADIX;
            *digit >>= 1;
        }
        self.trim();
    }

    /// Binary shift right: halves the magnitude `count` times, so negative values round
    /// toward zero. A non-positive count is a no-op.
    fn shr_impl(&self, count: &Self) -> Self {
        trace!("shr {} by {}", self, count);
        let mut res = self.clone();
        let mut remaining = count.clone();
        while remaining.is_positive() {
            if res.is_zero() {
                break;
            }
            res.halve();
            remaining.dec();
        }
        res
    }
}

// 实现乘法
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Double-and-add over the binary expansion of `multiplicand`'s magnitude.
    fn mul_impl(&self, multiplicand: &Self) -> Self {
        let mut res = RadixInt::zero();
        let mut acc = self.clone();
        let mut bits = multiplicand.abs();
        let mut rounds = 0usize;
        while !bits.is_zero() {
            if bits.is_odd() {
                res += &acc;
            }
            bits.halve();
            acc.double();
            rounds += 1;
        }
        trace!("mul {} by {} in {} rounds", self, multiplicand, rounds);

        if multiplicand.is_negative() {
            -res
        } else {
            res
        }
    }
}

macro_rules! impl_binary_op {
    ($($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $op_impl: ident;)*) => {
    $(
    impl<const RADIX: Digit> $imp<&RadixInt<RADIX>> for &RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: &RadixInt<RADIX>) -> Self::Output {
            self.$op_impl(rhs)
        }
    }

    impl<const RADIX: Digit> $imp<RadixInt<RADIX>> for RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: RadixInt<RADIX>) -> Self::Output {
            self.$op_impl(&rhs)
        }
    }

    impl<const RADIX: Digit> $imp<&RadixInt<RADIX>> for RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: &RadixInt<RADIX>) -> Self::Output {
            self.$op_impl(rhs)
        }
    }

    impl<const RADIX: Digit> $imp<RadixInt<RADIX>> for &RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: RadixInt<RADIX>) -> Self::Output {
            self.$op_impl(&rhs)
        }
    }

    impl<const RADIX: Digit> $imp<i64> for RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: i64) -> Self::Output {
            self.$op_impl(&RadixInt::from(rhs))
        }
    }

    impl<const RADIX: Digit> $imp<i64> for &RadixInt<RADIX> {
        type Output = RadixInt<RADIX>;

        fn $method(self, rhs: i64) -> Self::Output {
            self.$op_impl(&RadixInt::from(rhs))
        }
    }

    impl<const RADIX: Digit> $assign_imp<RadixInt<RADIX>> for RadixInt<RADIX> {
        fn $assign_method(&mut self, rhs: RadixInt<RADIX>) {
            *self = self.$op_impl(&rhs);
        }
    }

    impl<const RADIX: Digit> $assign_imp<&RadixInt<RADIX>> for RadixInt<RADIX> {
        fn $assign_method(&mut self, rhs: &RadixInt<RADIX>) {
            *self = self.$op_impl(rhs);
        }
    }

    impl<const RADIX: Digit> $assign_imp<i64> for RadixInt<RADIX> {
        fn $assign_method(&mut self, rhs: i64) {
            *self = self.$op_impl(&RadixInt::from(rhs));
        }
    }
    )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, add_impl;
    Sub, sub, SubAssign, sub_assign, sub_impl;
    Mul, mul, MulAssign, mul_assign, mul_impl;
    Shl, shl, ShlAssign, shl_assign, shl_impl;
    Shr, shr, ShrAssign, shr_assign, shr_impl;
}

impl<const RADIX: Digit> Sum for RadixInt<RADIX> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(RadixInt::zero(), |acc, num| acc + num)
    }
}

impl<'a, const RADIX: Digit> Sum<&'a RadixInt<RADIX>> for RadixInt<RADIX> {
    fn sum<I: Iterator<Item = &'a RadixInt<RADIX>>>(iter: I) -> Self {
        iter.fold(RadixInt::zero(), |acc, num| acc + num)
    }
}

impl<const RADIX: Digit> Product for RadixInt<RADIX> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(RadixInt::one(), |acc, num| acc * num)
    }
}

impl<'a, const RADIX: Digit> Product<&'a RadixInt<RADIX>> for RadixInt<RADIX> {
    fn product<I: Iterator<Item = &'a RadixInt<RADIX>>>(iter: I) -> Self {
        iter.fold(RadixInt::one(), |acc, num| acc * num)
    }
}

// 除法尚未实现
impl<const RADIX: Digit> RadixInt<RADIX> {
    /// Quotient and remainder of `self / divisor`.
    ///
    /// Division is not implemented yet: this fails with [`Error::DivisionByZero`] for a zero
    /// divisor and [`Error::Unimplemented`] otherwise.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.reject_division(divisor, "div_rem")
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.reject_division(divisor, "div").map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.reject_division(divisor, "rem").map(|(_, remainder)| remainder)
    }

    fn reject_division(&self, divisor: &Self, operation: &'static str) -> Result<(Self, Self)> {
        debug!("rejecting {}({}, {})", operation, self, divisor);
        if divisor.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Err(Error::Unimplemented { operation })
        }
    }
}

#[test]
fn test_from() {
    let a = BigInt::from(9482);
    assert_eq!(a.digits(), &[2, 1, 4, 0, 0, 3]);
    assert!(a.sign());

    let a = BigInt::from(-18964);
    assert_eq!(a.digits(), &[4, 2, 3, 1, 0, 1, 1]);
    assert!(a.is_negative());

    assert_eq!(BigInt::from(4).digits(), &[4]);
    assert_eq!(BigInt::from(25u32).digits(), &[0, 0, 1]);
    assert_eq!(BigInt::from(0).digits(), &[0]);
    assert!(BigInt::from(0).sign());

    assert_eq!(RadixInt::<2>::from(10).digits(), &[0, 1, 0, 1]);
    assert_eq!(RadixInt::<10>::from(1000).digits(), &[0, 0, 0, 1]);
}

#[test]
fn test_to_i64() {
    for val in [0, 1, -1, 4, 5, -25, 9482, -18964, 179_816_648, i64::MAX, i64::MIN] {
        assert_eq!(BigInt::from(val).to_i64(), val);
        assert_eq!(RadixInt::<127>::from(val).to_i64(), val);
    }
    assert_eq!(to_int(&BigInt::from(-42)), -42);
    assert_eq!(i64::from(&RadixInt::<2>::from(77)), 77);
}

#[test]
fn test_to_i64_is_lossy() {
    // 2^64 wraps to 0 instead of reporting an overflow
    let big = BigInt::from(1) << 64;
    assert_eq!(big.to_i64(), 0);
}

#[test]
fn test_clear_and_trim() {
    let mut a = BigInt::from(-9482);
    a.clear();
    assert!(a.is_zero());
    assert!(a.sign());
    assert_eq!(a.digits(), &[0]);

    let mut b = BigInt::from(7);
    b.pad(3);
    assert_eq!(b.digit_len(), 5);
    b.trim();
    assert_eq!(b.digits(), &[2, 1]);

    let mut z = BigInt::zero();
    z.pad(2);
    z.trim();
    assert_eq!(z.digits(), &[0]);
}

#[test]
fn test_is_odd() {
    for val in -30..30 {
        assert_eq!(BigInt::from(val).is_odd(), val % 2 != 0, "radix 5, val = {}", val);
        assert_eq!(RadixInt::<10>::from(val).is_odd(), val % 2 != 0, "radix 10, val = {}", val);
        assert_eq!(RadixInt::<3>::from(val).is_even(), val % 2 == 0, "radix 3, val = {}", val);
    }
}

#[test]
fn test_neg_and_abs() {
    let a = BigInt::from(12);
    assert_eq!(-&a, BigInt::from(-12));
    assert_eq!((-a.clone()).abs(), a);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert!((-BigInt::zero()).sign());
}

#[test]
fn test_compare() {
    assert!(BigInt::from(-5) < BigInt::from(3));
    assert!(BigInt::from(-9482) < BigInt::from(-1));
    assert!(BigInt::from(-1) > BigInt::from(-9482));
    assert!(BigInt::from(24) < BigInt::from(25));
    assert!(BigInt::from(-24) > BigInt::from(-25));
    assert!(BigInt::from(13) <= BigInt::from(13));
    assert!(BigInt::from(-13) >= BigInt::from(-13));
    assert_eq!(BigInt::from(-13).cmp(&BigInt::from(-13)), Ordering::Equal);
    assert_eq!(BigInt::from(-130).cmp(&BigInt::from(-13)), Ordering::Less);
    assert_eq!(BigInt::from(-13).cmp(&BigInt::from(-14)), Ordering::Greater);
    assert_eq!(BigInt::from(0).cmp(&BigInt::from(-1)), Ordering::Greater);
    assert_eq!(BigInt::from(-1).cmp(&BigInt::from(0)), Ordering::Less);
    assert_ne!(BigInt::from(13), BigInt::from(-13));
}

#[test]
fn test_add_sub() {
    let a = BigInt::from(9482);
    let b = BigInt::from(18964);
    assert_eq!(&a + &b, BigInt::from(28446));
    assert_eq!(&a - &b, BigInt::from(-9482));
    assert_eq!(&b - &a, a);
    assert_eq!(&a - &a, BigInt::zero());
    assert_eq!(BigInt::from(-5) + BigInt::zero(), BigInt::from(-5));
    assert_eq!(BigInt::zero() - BigInt::from(-5), BigInt::from(5));
    assert_eq!(BigInt::from(24) + 1, BigInt::from(25));
    assert_eq!(BigInt::from(25) - 1, BigInt::from(24));
    assert_eq!((BigInt::from(25) - 1).digit_len(), 2);

    let mut c = BigInt::from(100);
    c += &BigInt::from(-150);
    assert_eq!(c, BigInt::from(-50));
    c -= -50;
    assert!(c.is_zero());
    assert!(c.sign());
}

#[test]
fn test_inc_dec() {
    let mut a = BigInt::from(-1);
    assert_eq!(*a.inc(), BigInt::zero());
    assert_eq!(a.post_inc(), BigInt::zero());
    assert_eq!(a, BigInt::one());
    assert_eq!(a.post_dec(), BigInt::one());
    assert_eq!(*a.dec(), BigInt::from(-1));
}

#[test]
fn test_shift() {
    let a = BigInt::from(9482);
    assert_eq!(&a << 1, BigInt::from(18964));
    assert_eq!(&a << 10, BigInt::from(9482 << 10));
    assert_eq!(&a >> 3, BigInt::from(9482 >> 3));
    assert_eq!(&a >> 100, BigInt::zero());
    assert_eq!(&a << -3, a);
    assert_eq!(BigInt::from(-7) >> 1, BigInt::from(-3));
    assert_eq!(BigInt::from(-7) << 2, BigInt::from(-28));
    assert_eq!(BigInt::from(-1) >> 1, BigInt::zero());

    let mut b = RadixInt::<2>::from(3);
    b <<= RadixInt::<2>::from(4);
    assert_eq!(b.to_i64(), 48);
    b >>= 5;
    assert_eq!(b.to_i64(), 1);
}

#[test]
fn test_mul() {
    let a = BigInt::from(9482);
    let b = BigInt::from(18964);
    assert_eq!((&a * &b).to_i64(), 9482 * 18964);
    assert_eq!(&a * &b, BigInt::from(179_816_648));
    assert_eq!(BigInt::from(7) * BigInt::from(3), BigInt::from(21));
    assert_eq!(BigInt::from(3) * -2, BigInt::from(-6));
    assert_eq!(BigInt::from(-3) * -2, BigInt::from(6));
    assert_eq!(BigInt::from(-3) * 0, BigInt::zero());

    let mut c = RadixInt::<127>::from(1);
    for _ in 0..5 {
        c *= 1000;
    }
    assert_eq!(c.to_i64(), 1_000_000_000_000_000);
}

#[test]
fn test_sum_product() {
    let nums: Vec<BigInt> = (1..=6i64).map(BigInt::from).collect();
    assert_eq!(nums.iter().sum::<BigInt>(), BigInt::from(21));
    assert_eq!(nums.into_iter().product::<BigInt>(), BigInt::from(720));
}

#[test]
fn test_division_is_rejected() {
    let a = BigInt::from(120);
    assert_eq!(a.div_rem(&BigInt::zero()), Err(Error::DivisionByZero));
    assert_eq!(
        a.checked_div(&BigInt::from(13)),
        Err(Error::Unimplemented { operation: "div" })
    );
    assert_eq!(
        a.checked_rem(&BigInt::from(13)),
        Err(Error::Unimplemented { operation: "rem" })
    );
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::from(9482).to_string(), "+ 3 0 0 4 1 2");
    assert_eq!(BigInt::from(-18964).to_string(), "- 1 1 0 1 3 2 4");
    assert_eq!(BigInt::zero().to_string(), "+ 0");
    assert_eq!(RadixInt::<127>::from(-254).to_string(), "- 2 0");
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range() {
    let a = BigInt::from(9482);
    assert_eq!(a[0], 2);
    assert_eq!(a[5], 3);
    let _digit = a[6];
}
