// SPDX-License-Identifier: MPL-2.0
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use super::{
    digits::Digit,
    unsigned::{self, FromStrErr},
    DivisionByZero, KaratsubaThreshold,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Positive,
}
impl Sign {
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    /// `Positive` exactly when both signs match
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => Self::Positive,
            _ => Self::Negative,
        }
    }
}
impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// A signed number of arbitrary size, a sign next to an owned magnitude.
///
/// Zero always carries `Sign::Positive`, so there is exactly one
/// representation per value.
#[derive(Clone)]
pub struct BigInt<D> {
    sign: Sign,
    unsigned: unsigned::BigInt<D>,
}

impl<D: Digit> Hash for BigInt<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.unsigned.hash(state);
    }
}

impl<D: Digit> BigInt<D> {
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            unsigned: unsigned::BigInt::zero(),
        }
    }
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            unsigned: unsigned::BigInt::one(),
        }
    }
    /// builds a number from sign and magnitude, a negative zero collapses to
    /// plain zero
    pub fn new(sign: Sign, magnitude: unsigned::BigInt<D>) -> Self {
        let mut out = Self {
            sign,
            unsigned: magnitude,
        };
        out.canonicalize();
        out
    }
    fn canonicalize(&mut self) {
        if self.unsigned.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// the sign, `Positive` for zero
    pub const fn sign(&self) -> Sign {
        self.sign
    }
    pub fn is_zero(&self) -> bool {
        self.unsigned.is_zero()
    }
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
    pub fn abs(&self) -> &unsigned::BigInt<D> {
        &self.unsigned
    }
    pub fn into_abs(self) -> unsigned::BigInt<D> {
        self.unsigned
    }
    pub fn negate(&mut self) {
        if !self.unsigned.is_zero() {
            self.sign = -self.sign;
        }
    }

    pub fn increment(&mut self) {
        match self.sign {
            Sign::Positive => self.unsigned.increment(),
            Sign::Negative => {
                self.unsigned.decrement();
                self.canonicalize();
            }
        }
    }
    pub fn decrement(&mut self) {
        if self.sign.is_negative() {
            self.unsigned.increment();
        } else if self.unsigned.is_zero() {
            self.sign = Sign::Negative;
            self.unsigned.increment();
        } else {
            self.unsigned.decrement();
        }
    }

    /// quotient and remainder in one pass, the checked form of `/` and `%`.
    ///
    /// Division truncates towards zero, so the remainder keeps the dividend's
    /// sign and `a == (a / b) * b + a % b` holds.
    pub fn div_mod(&self, rhs: &Self) -> Result<(Self, Self), DivisionByZero> {
        let (quotient, remainder) = self.unsigned.div_mod(&rhs.unsigned)?;
        Ok((
            Self::new(self.sign.combine(rhs.sign), quotient),
            Self::new(self.sign, remainder),
        ))
    }
    /// like `*`, but with an explicit karatsuba cutover
    pub fn mul_with_threshold(&self, rhs: &Self, threshold: KaratsubaThreshold) -> Self {
        Self::new(
            self.sign.combine(rhs.sign),
            self.unsigned.mul_with_threshold(&rhs.unsigned, threshold),
        )
    }
    /// square and multiply, negative base with an odd exponent stays negative
    pub fn pow(&self, exp: usize) -> Self {
        let sign = if self.sign.is_negative() && exp % 2 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, self.unsigned.pow(exp))
    }
}

impl<D: Digit> Default for BigInt<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Digit> PartialEq for BigInt<D> {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.unsigned == other.unsigned
    }
}
impl<D: Digit> Eq for BigInt<D> {}
impl<D: Digit> PartialOrd for BigInt<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<D: Digit> Ord for BigInt<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.unsigned.cmp(&other.unsigned),
            (Sign::Negative, Sign::Negative) => other.unsigned.cmp(&self.unsigned),
        }
    }
}

impl<D: Digit> From<unsigned::BigInt<D>> for BigInt<D> {
    fn from(value: unsigned::BigInt<D>) -> Self {
        Self {
            sign: Sign::Positive,
            unsigned: value,
        }
    }
}
impl<D: Digit> From<BigInt<D>> for unsigned::BigInt<D> {
    fn from(value: BigInt<D>) -> Self {
        value.unsigned
    }
}

macro_rules! implFromSignedPrimitive {
    ($($primitive:ident),*) => {$(
        impl<D: Digit> From<$primitive> for BigInt<D> {
            fn from(value: $primitive) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                unsigned::BigInt::from(value.unsigned_abs()).with_sign(sign)
            }
        }
    )*};
}
implFromSignedPrimitive!(i8, i16, i32, i64, i128, isize);

macro_rules! implFromUnsignedPrimitive {
    ($($primitive:ident),*) => {$(
        impl<D: Digit> From<$primitive> for BigInt<D> {
            fn from(value: $primitive) -> Self {
                unsigned::BigInt::from(value).into()
            }
        }
    )*};
}
implFromUnsignedPrimitive!(u8, u16, u32, u64, u128, usize);

impl<D: Digit> Neg for BigInt<D> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}
impl<D: Digit> Neg for &BigInt<D> {
    type Output = BigInt<D>;
    fn neg(self) -> BigInt<D> {
        -self.clone()
    }
}

impl<D: Digit> AddAssign<&Self> for BigInt<D> {
    fn add_assign(&mut self, rhs: &Self) {
        if self.sign == rhs.sign {
            self.unsigned += &rhs.unsigned;
        } else if self.unsigned < rhs.unsigned {
            let prev = mem::replace(&mut self.unsigned, rhs.unsigned.clone());
            self.unsigned -= &prev;
            self.sign = rhs.sign;
        } else {
            self.unsigned -= &rhs.unsigned;
        }
        self.canonicalize();
    }
}
impl<D: Digit> SubAssign<&Self> for BigInt<D> {
    fn sub_assign(&mut self, rhs: &Self) {
        if self.sign != rhs.sign {
            self.unsigned += &rhs.unsigned;
        } else if self.unsigned < rhs.unsigned {
            let prev = mem::replace(&mut self.unsigned, rhs.unsigned.clone());
            self.unsigned -= &prev;
            self.sign = -self.sign;
        } else {
            self.unsigned -= &rhs.unsigned;
        }
        self.canonicalize();
    }
}
impl<D: Digit> MulAssign<&Self> for BigInt<D> {
    fn mul_assign(&mut self, rhs: &Self) {
        self.sign = self.sign.combine(rhs.sign);
        self.unsigned *= &rhs.unsigned;
        self.canonicalize();
    }
}
impl<D: Digit> DivAssign<&Self> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod`] for the checked form
    fn div_assign(&mut self, rhs: &Self) {
        let (quotient, _) = self.div_mod(rhs).expect("can't divide by zero");
        *self = quotient;
    }
}
impl<D: Digit> RemAssign<&Self> for BigInt<D> {
    /// panics on a zero divisor, see [`Self::div_mod`] for the checked form
    fn rem_assign(&mut self, rhs: &Self) {
        let (_, remainder) = self.div_mod(rhs).expect("can't divide by zero");
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

fn strip_sign(input: &str) -> (Sign, &str) {
    input.strip_prefix('-').map_or_else(
        || (Sign::Positive, input.strip_prefix('+').unwrap_or(input)),
        |rest| (Sign::Negative, rest),
    )
}

impl<D: Digit> FromStr for BigInt<D> {
    type Err = FromStrErr;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = strip_sign(input);
        Ok(rest.parse::<unsigned::BigInt<D>>()?.with_sign(sign))
    }
}
impl<D: Digit> Display for BigInt<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(self.sign.is_positive(), "", &self.unsigned.to_decimal())
    }
}
impl<D: Digit> Debug for BigInt<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number {{ {}",
            if self.sign.is_negative() { "-" } else { "+" }
        )?;
        self.unsigned.inner_debug(f)?;
        f.write_str(" }")
    }
}
