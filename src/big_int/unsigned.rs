// SPDX-License-Identifier: MPL-2.0
use itertools::{EitherOrBoth, Itertools, Position};
use rand::RngCore;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, RangeInclusive, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use super::{
    digits::{Decomposable, Digit},
    math_algos, signed, DivisionByZero, KaratsubaThreshold,
};
use crate::util::rng;

/// error of [`BigInt::from_str`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FromStrErr {
    #[error("unknown digit {digit:?} at position {position}")]
    UnknownDigit { digit: char, position: usize },
    #[error("can't parse empty input")]
    Empty,
}

/// An unsigned number of arbitrary size, stored as little endian limbs in
/// base `2^D::BITS`.
///
/// Always holds at least one limb and never a redundant most significant
/// zero limb, so zero is exactly `[0]` and equal values have equal limbs.
#[derive(Clone)]
pub struct BigInt<D> {
    pub(super) digits: Vec<D>,
}

impl<D: Digit> Hash for BigInt<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl<D: Digit> BigInt<D> {
    pub fn zero() -> Self {
        Self {
            digits: vec![D::ZERO],
        }
    }
    pub fn one() -> Self {
        Self {
            digits: vec![D::ONE],
        }
    }
    pub fn from_digit(digit: D) -> Self {
        Self {
            digits: vec![digit],
        }
    }
    pub fn from_digits(digits: impl IntoIterator<Item = D>) -> Self {
        let mut out = Self {
            digits: digits.into_iter().collect(),
        };
        out.truncate_leading_zeros();
        out
    }
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        Self::from_digits(
            bytes
                .chunks(D::BITS / 8)
                .map(|chunk| math_algos::digit_from_le_bytes(chunk.iter().copied())),
        )
    }
    /// a random number with a length in `bytes` and a nonzero top byte
    pub fn new_random(bytes: RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        let len = bytes.start() + rng::next_bound(bytes.end() - bytes.start(), &mut rng, 10);
        assert!(len > 0, "need at least one byte");
        let mut rnd = rng::random_bytes(rng);
        let top = rnd.by_ref().find(|&byte| byte > 0).unwrap_or(1);
        let buf = rnd
            .take(len - 1)
            .chain(std::iter::once(top))
            .collect::<Vec<_>>();
        Self::from_le_bytes(&buf)
    }

    /// the little endian limbs, at least one, no redundant top zero
    pub fn limbs(&self) -> &[D] {
        &self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == D::ZERO
    }
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == D::ONE
    }

    pub(super) fn truncate_leading_zeros(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&D::ZERO) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(D::ZERO);
        }
    }

    pub fn increment(&mut self) {
        math_algos::add::assign_digit(self, D::ONE);
    }
    /// panics when called on zero
    pub fn decrement(&mut self) {
        assert!(!self.is_zero(), "can't decrement zero");
        math_algos::sub::assign_digit(self, D::ONE);
    }

    /// quotient and remainder in one pass, the checked form of `/` and `%`
    pub fn div_mod(&self, rhs: &Self) -> Result<(Self, Self), DivisionByZero> {
        math_algos::div::div_mod(self, rhs)
    }
    /// single limb fast path of [`Self::div_mod`]
    pub fn div_mod_digit(&self, rhs: D) -> Result<(Self, D), DivisionByZero> {
        math_algos::div::by_digit(self, rhs)
    }
    /// like `*`, but with an explicit karatsuba cutover
    pub fn mul_with_threshold(&self, rhs: &Self, threshold: KaratsubaThreshold) -> Self {
        math_algos::mul::with_threshold(self, rhs, threshold)
    }

    /// square and multiply, `0^0 == 1`
    pub fn pow(&self, mut exp: usize) -> Self {
        if exp == 0 {
            return Self::one();
        }
        if self.is_zero() {
            return Self::zero();
        }
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 1 {
            if exp & 1 == 1 {
                acc *= &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        base * acc
    }

    pub fn with_sign(self, sign: signed::Sign) -> signed::BigInt<D> {
        signed::BigInt::new(sign, self)
    }

    pub(super) fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let ten = D::from(10u8);
        let mut digits = Vec::new();
        let mut num = self.clone();
        while !num.is_zero() {
            let (quotient, remainder) = math_algos::div::by_digit(&num, ten)
                .unwrap_or_else(|_| unreachable!("ten is not zero"));
            digits.push(b'0' + remainder.truncate_u8());
            num = quotient;
        }
        digits.reverse();
        String::from_utf8(digits).unwrap_or_else(|_| unreachable!("only ascii digits"))
    }

    pub(super) fn inner_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("0x[")?;
        for (position, digit) in self.digits.iter().rev().with_position() {
            write!(f, "{digit:0width$x}", width = D::BITS / 4)?;
            if matches!(position, Position::First | Position::Middle) {
                f.write_str(", ")?;
            }
        }
        f.write_str("]")
    }
}

impl<D: Digit> Default for BigInt<D> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<D: Digit> FromIterator<D> for BigInt<D> {
    fn from_iter<T: IntoIterator<Item = D>>(iter: T) -> Self {
        Self::from_digits(iter)
    }
}

macro_rules! implFromUnsigned {
    ($($primitive:ty),*) => {$(
        impl<D: Digit> From<$primitive> for BigInt<D> {
            fn from(value: $primitive) -> Self {
                Self::from_le_bytes(&value.to_le_bytes())
            }
        }
    )*};
}
implFromUnsigned!(u8, u16, u32, u64, u128, usize);

impl<D: Digit> Decomposable<D> for BigInt<D> {
    fn le_digits(&self) -> impl ExactSizeIterator<Item = D> + DoubleEndedIterator + '_ {
        self.digits.iter().copied()
    }
}

impl<D: Digit, M: Decomposable<D>> PartialEq<M> for BigInt<D> {
    fn eq(&self, other: &M) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
impl<D: Digit> Eq for BigInt<D> {}
impl<D: Digit, M: Decomposable<D>> PartialOrd<M> for BigInt<D> {
    /// compares from the most significant position, missing limbs on either
    /// side count as zero
    fn partial_cmp(&self, other: &M) -> Option<Ordering> {
        for element in self.digits.iter().zip_longest(other.le_digits()).rev() {
            let ord = match element {
                EitherOrBoth::Both(lhs, rhs) => lhs.cmp(&rhs),
                EitherOrBoth::Left(lhs) => lhs.cmp(&D::ZERO),
                EitherOrBoth::Right(rhs) => D::ZERO.cmp(&rhs),
            };
            if ord.is_ne() {
                return Some(ord);
            }
        }
        Some(Ordering::Equal)
    }
}
impl<D: Digit> Ord for BigInt<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other)
            .unwrap_or_else(|| unreachable!("limb comparison is total"))
    }
}

impl<D: Digit> Debug for BigInt<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Number { ")?;
        self.inner_debug(f)?;
        f.write_str(" }")
    }
}
impl<D: Digit> Display for BigInt<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.to_decimal())
    }
}
impl<D: Digit> FromStr for BigInt<D> {
    type Err = FromStrErr;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(FromStrErr::Empty);
        }
        let ten = D::from(10u8);
        let mut num = Self::zero();
        for (position, c) in input.chars().enumerate() {
            let Some(value) = c.to_digit(10) else {
                return Err(FromStrErr::UnknownDigit { digit: c, position });
            };
            math_algos::mul::assign_digit(&mut num, ten);
            math_algos::add::assign_digit(&mut num, D::from(value as u8));
        }
        Ok(num)
    }
}

impl<D: Digit> AddAssign<&Self> for BigInt<D> {
    fn add_assign(&mut self, rhs: &Self) {
        math_algos::add::assign(self, rhs);
    }
}
impl<D: Digit> SubAssign<&Self> for BigInt<D> {
    /// panics when the result would be negative
    fn sub_assign(&mut self, rhs: &Self) {
        assert!(*self >= *rhs, "result would be negative");
        math_algos::sub::assign_smaller(self, rhs);
    }
}
impl<D: Digit> MulAssign<&Self> for BigInt<D> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = math_algos::mul::with_threshold(self, rhs, KaratsubaThreshold::default());
    }
}
impl<D: Digit> DivAssign<&Self> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod`] for the checked form
    fn div_assign(&mut self, rhs: &Self) {
        let (quotient, _) = math_algos::div::div_mod(self, rhs).expect("can't divide by zero");
        *self = quotient;
    }
}
impl<D: Digit> RemAssign<&Self> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod`] for the checked form
    fn rem_assign(&mut self, rhs: &Self) {
        let (_, remainder) = math_algos::div::div_mod(self, rhs).expect("can't divide by zero");
        *self = remainder;
    }
}

macro_rules! implBigMath {
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident) => {
        impl<D: Digit> $assign_trait for BigInt<D> {
            fn $assign_func(&mut self, rhs: Self) {
                self.$assign_func(&rhs);
            }
        }
        impl<D: Digit> $trait for BigInt<D> {
            type Output = Self;
            fn $func(mut self, rhs: Self) -> Self {
                self.$assign_func(&rhs);
                self
            }
        }
        impl<D: Digit> $trait<&Self> for BigInt<D> {
            type Output = Self;
            fn $func(mut self, rhs: &Self) -> Self {
                self.$assign_func(rhs);
                self
            }
        }
        impl<D: Digit> $trait<BigInt<D>> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: BigInt<D>) -> BigInt<D> {
                let mut out = self.clone();
                out.$assign_func(&rhs);
                out
            }
        }
        impl<D: Digit> $trait<Self> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: Self) -> BigInt<D> {
                let mut out = self.clone();
                out.$assign_func(rhs);
                out
            }
        }
    };
}
implBigMath!(AddAssign, add_assign, Add, add);
implBigMath!(SubAssign, sub_assign, Sub, sub);
implBigMath!(MulAssign, mul_assign, Mul, mul);
implBigMath!(DivAssign, div_assign, Div, div);
implBigMath!(RemAssign, rem_assign, Rem, rem);

impl<D: Digit> AddAssign<D> for BigInt<D> {
    fn add_assign(&mut self, rhs: D) {
        math_algos::add::assign_digit(self, rhs);
    }
}
impl<D: Digit> SubAssign<D> for BigInt<D> {
    /// panics when the result would be negative
    fn sub_assign(&mut self, rhs: D) {
        assert!(*self >= rhs, "result would be negative");
        math_algos::sub::assign_digit(self, rhs);
    }
}
impl<D: Digit> MulAssign<D> for BigInt<D> {
    fn mul_assign(&mut self, rhs: D) {
        math_algos::mul::assign_digit(self, rhs);
    }
}
impl<D: Digit> DivAssign<D> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod_digit`] for the checked form
    fn div_assign(&mut self, rhs: D) {
        let (quotient, _) = math_algos::div::by_digit(self, rhs).expect("can't divide by zero");
        *self = quotient;
    }
}
impl<D: Digit> RemAssign<D> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod_digit`] for the checked form
    fn rem_assign(&mut self, rhs: D) {
        let (_, remainder) = math_algos::div::by_digit(self, rhs).expect("can't divide by zero");
        *self = Self::from_digit(remainder);
    }
}

macro_rules! implBigMathDigit {
    ($assign_func:ident, $trait:ident, $func:ident) => {
        impl<D: Digit> $trait<D> for BigInt<D> {
            type Output = Self;
            fn $func(mut self, rhs: D) -> Self {
                self.$assign_func(rhs);
                self
            }
        }
        impl<D: Digit> $trait<D> for &BigInt<D> {
            type Output = BigInt<D>;
            fn $func(self, rhs: D) -> BigInt<D> {
                let mut out = self.clone();
                out.$assign_func(rhs);
                out
            }
        }
    };
}
implBigMathDigit!(add_assign, Add, add);
implBigMathDigit!(sub_assign, Sub, sub);
implBigMathDigit!(mul_assign, Mul, mul);
implBigMathDigit!(div_assign, Div, div);
implBigMathDigit!(rem_assign, Rem, rem);
