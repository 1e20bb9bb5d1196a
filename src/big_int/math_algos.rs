// SPDX-License-Identifier: MPL-2.0
use super::digits::Digit;

pub mod add {
    use super::super::{digits::Digit, unsigned::BigInt};
    use itertools::{EitherOrBoth, Itertools};

    pub fn assign<D: Digit>(lhs: &mut BigInt<D>, rhs: &BigInt<D>) {
        let orig_lhs_len = lhs.digits.len();
        lhs.digits.extend(rhs.digits.iter().skip(orig_lhs_len));

        let mut carry = false;
        for element in lhs
            .digits
            .iter_mut()
            .zip_longest(rhs.digits.iter().take(orig_lhs_len))
        {
            let (digit, rhs_digit) = match element {
                EitherOrBoth::Right(_) => unreachable!("lhs was extended"),
                EitherOrBoth::Left(_) if !carry => break,
                EitherOrBoth::Left(digit) => (digit, D::ZERO),
                EitherOrBoth::Both(digit, rhs_digit) => (digit, *rhs_digit),
            };
            (*digit, carry) = digit.carrying_add(rhs_digit, carry);
        }
        if carry {
            lhs.digits.push(D::ONE);
        }
    }

    /// adds `rhs * B^offset` to `lhs`
    pub fn assign_at_offset<D: Digit>(lhs: &mut BigInt<D>, rhs: &BigInt<D>, offset: usize) {
        if rhs.is_zero() {
            return;
        }
        if lhs.digits.len() < offset {
            lhs.digits.resize(offset, D::ZERO);
        }
        let mut carry = false;
        for (i, &rhs_digit) in rhs.digits.iter().enumerate() {
            let position = offset + i;
            if position == lhs.digits.len() {
                lhs.digits.push(D::ZERO);
            }
            (lhs.digits[position], carry) = lhs.digits[position].carrying_add(rhs_digit, carry);
        }
        let mut position = offset + rhs.digits.len();
        while carry {
            if position == lhs.digits.len() {
                lhs.digits.push(D::ZERO);
            }
            (lhs.digits[position], carry) = lhs.digits[position].carrying_add(D::ZERO, carry);
            position += 1;
        }
    }

    pub fn assign_digit<D: Digit>(lhs: &mut BigInt<D>, rhs: D) {
        let mut carry = rhs;
        for digit in &mut lhs.digits {
            if carry == D::ZERO {
                return;
            }
            let overflow;
            (*digit, overflow) = digit.overflowing_add(carry);
            carry = if overflow { D::ONE } else { D::ZERO };
        }
        if carry != D::ZERO {
            lhs.digits.push(carry);
        }
    }
}

pub mod sub {
    use super::super::{digits::Digit, unsigned::BigInt};
    use itertools::{EitherOrBoth, Itertools};

    /// subtracts `rhs` from `lhs`, needs `lhs >= rhs`
    pub fn assign_smaller<D: Digit>(lhs: &mut BigInt<D>, rhs: &BigInt<D>) {
        debug_assert!(*lhs >= *rhs, "result would be negative");
        let mut borrow = false;
        for element in lhs.digits.iter_mut().zip_longest(rhs.digits.iter()) {
            let (digit, rhs_digit) = match element {
                EitherOrBoth::Right(_) => unreachable!("lhs is at least as long as rhs"),
                EitherOrBoth::Left(_) if !borrow => break,
                EitherOrBoth::Left(digit) => (digit, D::ZERO),
                EitherOrBoth::Both(digit, rhs_digit) => (digit, *rhs_digit),
            };
            (*digit, borrow) = digit.borrowing_sub(rhs_digit, borrow);
        }
        debug_assert!(!borrow);
        lhs.truncate_leading_zeros();
    }

    /// subtracts a single limb, needs `lhs >= rhs`
    pub fn assign_digit<D: Digit>(lhs: &mut BigInt<D>, rhs: D) {
        debug_assert!(*lhs >= rhs, "result would be negative");
        let mut borrow;
        (lhs.digits[0], borrow) = lhs.digits[0].overflowing_sub(rhs);
        let mut position = 1;
        while borrow {
            (lhs.digits[position], borrow) = lhs.digits[position].overflowing_sub(D::ONE);
            position += 1;
        }
        lhs.truncate_leading_zeros();
    }
}

pub mod mul {
    use super::super::{
        digits::{Digit, Wide},
        unsigned::BigInt,
        KaratsubaThreshold,
    };

    /// decides between [`schoolbook`] and [`karatsuba`] based on the larger
    /// operand's limb count
    pub fn with_threshold<D: Digit>(
        lhs: &BigInt<D>,
        rhs: &BigInt<D>,
        threshold: KaratsubaThreshold,
    ) -> BigInt<D> {
        if lhs.digits.len().max(rhs.digits.len()) < threshold.get() {
            schoolbook(lhs, rhs)
        } else {
            karatsuba(lhs, rhs, threshold)
        }
    }

    pub fn assign_digit<D: Digit>(lhs: &mut BigInt<D>, rhs: D) {
        let mut carry = D::ZERO;
        for digit in &mut lhs.digits {
            (*digit, carry) = digit.widening_mul(rhs, carry).split_le();
        }
        if carry != D::ZERO {
            lhs.digits.push(carry);
        }
        lhs.truncate_leading_zeros();
    }

    /// shift-add multiplication, one scaled copy of `lhs` per limb of `rhs`
    pub fn schoolbook<D: Digit>(lhs: &BigInt<D>, rhs: &BigInt<D>) -> BigInt<D> {
        if lhs.digits.len() < rhs.digits.len() {
            return schoolbook(rhs, lhs);
        }
        let mut out = BigInt::zero();
        for (offset, &rhs_digit) in rhs.digits.iter().enumerate() {
            if rhs_digit == D::ZERO {
                continue;
            }
            let mut partial = lhs.clone();
            assign_digit(&mut partial, rhs_digit);
            super::add::assign_at_offset(&mut out, &partial, offset);
        }
        out
    }

    /// splits both operands at half the larger limb count:
    /// `(a0 + a1*B^k) * (b0 + b1*B^k)
    ///   = a0*b0 + ((a0+a1)*(b0+b1) - a0*b0 - a1*b1)*B^k + a1*b1*B^2k`
    ///
    /// sub-products go back through [`with_threshold`], so recursion stops as
    /// soon as the pieces fall under the threshold
    pub fn karatsuba<D: Digit>(
        lhs: &BigInt<D>,
        rhs: &BigInt<D>,
        threshold: KaratsubaThreshold,
    ) -> BigInt<D> {
        if lhs.digits.len() == 1 {
            let mut out = rhs.clone();
            assign_digit(&mut out, lhs.digits[0]);
            return out;
        }
        if rhs.digits.len() == 1 {
            let mut out = lhs.clone();
            assign_digit(&mut out, rhs.digits[0]);
            return out;
        }
        let split = lhs.digits.len().max(rhs.digits.len()) / 2;
        let (a0, a1) = split_at(lhs, split);
        let (b0, b1) = split_at(rhs, split);

        let p0 = with_threshold(&a0, &b0, threshold);
        let p1 = with_threshold(&a1, &b1, threshold);
        let mut pm = with_threshold(&(&a0 + &a1), &(&b0 + &b1), threshold);
        pm -= &p0;
        pm -= &p1;

        let mut out = p0;
        super::add::assign_at_offset(&mut out, &pm, split);
        super::add::assign_at_offset(&mut out, &p1, 2 * split);
        out
    }

    fn split_at<D: Digit>(num: &BigInt<D>, at: usize) -> (BigInt<D>, BigInt<D>) {
        let at = at.min(num.digits.len());
        (
            BigInt::from_digits(num.digits[..at].iter().copied()),
            BigInt::from_digits(num.digits[at..].iter().copied()),
        )
    }
}

pub mod div {
    use super::super::{
        digits::{Digit, Wide},
        unsigned::BigInt,
        DivisionByZero,
    };

    /// divides by a single limb, scanning from the most significant limb with
    /// the running remainder in the high half of the accumulator
    pub fn by_digit<D: Digit>(lhs: &BigInt<D>, rhs: D) -> Result<(BigInt<D>, D), DivisionByZero> {
        if rhs == D::ZERO {
            return Err(DivisionByZero);
        }
        if *lhs < rhs {
            return Ok((BigInt::zero(), lhs.digits[0]));
        }
        let divisor = D::Wide::widen(rhs);
        let mut quotient = vec![D::ZERO; lhs.digits.len()];
        let mut remainder = D::ZERO;
        for (i, &digit) in lhs.digits.iter().enumerate().rev() {
            let acc = D::Wide::from_le_halves(digit, remainder);
            quotient[i] = (acc / divisor).split_le().0;
            remainder = (acc % divisor).split_le().0;
        }
        Ok((BigInt::from_digits(quotient), remainder))
    }

    /// restoring binary long division, the remainder falls out of the same
    /// pass that builds the quotient
    pub fn div_mod<D: Digit>(
        lhs: &BigInt<D>,
        rhs: &BigInt<D>,
    ) -> Result<(BigInt<D>, BigInt<D>), DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        if *lhs < *rhs {
            return Ok((BigInt::zero(), lhs.clone()));
        }
        if rhs.is_one() {
            return Ok((lhs.clone(), BigInt::zero()));
        }
        if rhs.digits.len() == 1 {
            let (quotient, remainder) = by_digit(lhs, rhs.digits[0])?;
            return Ok((quotient, BigInt::from_digit(remainder)));
        }
        let mut quotient = BigInt::zero();
        let mut remainder = BigInt::zero();
        for &digit in lhs.digits.iter().rev() {
            for i in (0..D::BITS).rev() {
                shl_bit(&mut remainder, digit.get_bit(i));
                if remainder >= *rhs {
                    super::sub::assign_smaller(&mut remainder, rhs);
                    shl_bit(&mut quotient, true);
                } else {
                    shl_bit(&mut quotient, false);
                }
            }
        }
        Ok((quotient, remainder))
    }

    /// doubles `num` and sets the fresh lowest bit
    fn shl_bit<D: Digit>(num: &mut BigInt<D>, bit: bool) {
        let mut carry = if bit { D::ONE } else { D::ZERO };
        for digit in &mut num.digits {
            let high = *digit >> (D::BITS - 1);
            *digit = *digit << 1 | carry;
            carry = high;
        }
        if carry != D::ZERO {
            num.digits.push(carry);
        }
    }
}

/// assembles a limb from up to `D::BITS / 8` little endian bytes
pub(super) fn digit_from_le_bytes<D: Digit>(bytes: impl IntoIterator<Item = u8>) -> D {
    bytes
        .into_iter()
        .enumerate()
        .fold(D::ZERO, |acc, (i, byte)| acc | D::from(byte) << (8 * i))
}
