// SPDX-License-Identifier: MPL-2.0
use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::ops::{Add, BitOr, Div, Mul, Rem, Shl, Shr};

/// Yields the digits of a number in little endian order.
///
/// Implemented by the limb types themselves, their wide counterparts and the
/// big integers, so all of them can be compared against each other without
/// allocating.
pub trait Decomposable<D> {
    fn le_digits(&self) -> impl ExactSizeIterator<Item = D> + DoubleEndedIterator + '_;
}

/// A single limb of a big integer.
///
/// `Wide` holds the full result of a limb-by-limb multiplication or a running
/// division remainder next to an incoming limb, so carries never get lost.
pub trait Digit:
    Copy
    + Debug
    + LowerHex
    + Eq
    + Ord
    + Hash
    + From<u8>
    + Decomposable<Self>
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + BitOr<Self, Output = Self>
    + 'static
{
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    type Wide: Wide<Self>;

    /// the low 8 bits of this limb
    fn truncate_u8(self) -> u8;
    /// whether bit `i` is set, with `i < Self::BITS`
    fn get_bit(self, i: usize) -> bool;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);

    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (res, carry_a) = self.overflowing_add(rhs);
        let (res, carry_b) = res.overflowing_add(if carry { Self::ONE } else { Self::ZERO });
        (res, carry_a | carry_b)
    }
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (res, borrow_a) = self.overflowing_sub(rhs);
        let (res, borrow_b) = res.overflowing_sub(if borrow { Self::ONE } else { Self::ZERO });
        (res, borrow_a | borrow_b)
    }
    /// computes `self * rhs + carry`, which always fits in `Self::Wide`
    fn widening_mul(self, rhs: Self, carry: Self) -> Self::Wide {
        Self::Wide::widen(self) * Self::Wide::widen(rhs) + Self::Wide::widen(carry)
    }
}

/// The double width counterpart of a limb type.
pub trait Wide<Half>:
    Copy
    + Debug
    + Eq
    + Ord
    + Add<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Decomposable<Half>
{
    fn widen(half: Half) -> Self;
    fn from_le_halves(low: Half, high: Half) -> Self;
    /// `(low, high)` halves
    fn split_le(self) -> (Half, Half);
}

macro_rules! implDigit {
    ($digit:ident, $wide:ident) => {
        impl Decomposable<Self> for $digit {
            fn le_digits(&self) -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator + '_ {
                std::iter::once(*self)
            }
        }
        impl Digit for $digit {
            const BITS: usize = Self::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = Self::MAX;
            type Wide = $wide;

            fn truncate_u8(self) -> u8 {
                self as u8
            }
            fn get_bit(self, i: usize) -> bool {
                self >> i & 1 != 0
            }
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                self.overflowing_add(rhs)
            }
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                self.overflowing_sub(rhs)
            }
        }
        impl Decomposable<$digit> for $wide {
            fn le_digits(
                &self,
            ) -> impl ExactSizeIterator<Item = $digit> + DoubleEndedIterator + '_ {
                <[$digit; 2]>::from(self.split_le()).into_iter()
            }
        }
        impl Wide<$digit> for $wide {
            fn widen(half: $digit) -> Self {
                half as Self
            }
            fn from_le_halves(low: $digit, high: $digit) -> Self {
                (high as Self) << $digit::BITS | low as Self
            }
            fn split_le(self) -> ($digit, $digit) {
                (self as $digit, (self >> $digit::BITS) as $digit)
            }
        }
    };
}
implDigit!(u8, u16);
implDigit!(u16, u32);
implDigit!(u32, u64);
