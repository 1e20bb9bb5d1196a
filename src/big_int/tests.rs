// SPDX-License-Identifier: MPL-2.0
use super::{
    signed, signed::Sign, unsigned, unsigned::FromStrErr, DivisionByZero, KaratsubaThreshold,
};
use crate::util::rng::seeded_rng;
use rand::RngCore;

type BigUInt = unsigned::BigInt<u32>;
type BigIInt = signed::BigInt<u32>;

mod create {
    use super::*;

    #[test]
    fn from_primitive_splits_limbs() {
        assert_eq!(
            BigUInt::from(0x7766_5544_3322_1100_9988u128).limbs(),
            [0x1100_9988, 0x5544_3322, 0x7766]
        );
        assert_eq!(BigUInt::from(0u8).limbs(), [0]);
        assert_eq!(
            unsigned::BigInt::<u8>::from(0x0102u16).limbs(),
            [0x02, 0x01]
        );
    }
    #[test]
    fn from_digits_normalizes() {
        assert_eq!(BigUInt::from_digits([1, 0, 0]).limbs(), [1]);
        assert_eq!(BigUInt::from_digits([0, 0, 0]).limbs(), [0]);
        assert_eq!(BigUInt::from_digits([]).limbs(), [0]);
        assert_eq!(BigUInt::from_digits([0, 7]).limbs(), [0, 7]);
    }
    #[test]
    fn default_is_zero() {
        assert!(BigUInt::default().is_zero());
        assert!(BigIInt::default().is_zero());
    }
    #[test]
    fn parse_consecutive_powers() {
        // 2^128 + 2^96 + 2^64 + 2^32 + 1
        let num = "340282367000166625996085689103316680705"
            .parse::<BigUInt>()
            .unwrap();
        assert_eq!(num.limbs(), [1, 1, 1, 1, 1]);
    }
    #[test]
    fn parse_accepts_leading_zeros() {
        assert_eq!("007".parse::<BigUInt>().unwrap(), BigUInt::from_digit(7));
    }
    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<BigUInt>(), Err(FromStrErr::Empty));
        assert_eq!("-".parse::<BigIInt>(), Err(FromStrErr::Empty));
    }
    #[test]
    fn parse_reports_position_of_unknown_digit() {
        assert_eq!(
            "12a4".parse::<BigUInt>(),
            Err(FromStrErr::UnknownDigit {
                digit: 'a',
                position: 2
            })
        );
        // only the signed parser understands a sign prefix
        assert_eq!(
            "+1".parse::<BigUInt>(),
            Err(FromStrErr::UnknownDigit {
                digit: '+',
                position: 0
            })
        );
    }
    #[test]
    fn parse_signed_prefixes() {
        assert_eq!("+42".parse::<BigIInt>().unwrap(), BigIInt::from(42));
        assert_eq!("-42".parse::<BigIInt>().unwrap(), BigIInt::from(-42));
        let negative_zero = "-0".parse::<BigIInt>().unwrap();
        assert!(negative_zero.is_zero());
        assert_eq!(negative_zero.sign(), Sign::Positive);
    }
    #[test]
    fn from_signed_primitives() {
        assert_eq!(BigIInt::from(-5i8), "-5".parse().unwrap());
        assert_eq!(
            BigIInt::from(i64::MIN),
            "-9223372036854775808".parse().unwrap()
        );
        assert_eq!(BigIInt::from(7u64), "7".parse().unwrap());
    }
}

mod output {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(BigUInt::zero().to_string(), "0");
        assert_eq!(BigIInt::zero().to_string(), "0");
    }
    #[test]
    fn decimal_round_trip() {
        for input in [
            "1",
            "4294967296",
            "340282367000166625996085689103316680705",
            "43058023606949152",
        ] {
            assert_eq!(input.parse::<BigUInt>().unwrap().to_string(), input);
        }
        assert_eq!("-100".parse::<BigIInt>().unwrap().to_string(), "-100");
    }
    #[test]
    fn power_of_two() {
        assert_eq!(
            BigUInt::from_digit(2).pow(100).to_string(),
            "1267650600228229401496703205376"
        );
    }
    #[test]
    fn respects_width_and_alignment() {
        assert_eq!(format!("{:>6}", BigUInt::from_digit(42)), "    42");
        assert_eq!(format!("{:>6}", BigIInt::from(-42)), "   -42");
    }
    #[test]
    fn debug_dumps_limbs_in_hex() {
        assert_eq!(
            format!("{:?}", BigUInt::from(0x1_0000_0000u64)),
            "Number { 0x[00000001, 00000000] }"
        );
        assert_eq!(
            format!("{:?}", BigIInt::from(-5)),
            "Number { -0x[00000005] }"
        );
    }
}

mod order {
    use super::*;

    #[test]
    fn fewer_limbs_are_smaller() {
        let small = BigUInt::from(0xffff_ffffu32);
        let large = BigUInt::from(0x1_0000_0000u64);
        assert!(small < large);
        assert!(large > small);
    }
    #[test]
    fn same_length_compares_most_significant_first() {
        let lhs = BigUInt::from_digits([5, 1, 3]);
        let rhs = BigUInt::from_digits([9, 9, 2]);
        assert!(lhs > rhs);
    }
    #[test]
    fn against_native_limb() {
        let num = BigUInt::from_digit(5);
        assert_eq!(num, 5u32);
        assert!(num < 6u32);
        assert!(num > 4u32);
    }
    #[test]
    fn against_native_double_limb() {
        assert_eq!(BigUInt::from_digit(5), 5u64);
        assert_eq!(BigUInt::from(u64::MAX), u64::MAX);
        assert!(BigUInt::from(0x2_0000_0001u64) > u64::from(u32::MAX));
        // more limbs than the native width fits
        assert!("340282367000166625996085689103316680705"
            .parse::<BigUInt>()
            .unwrap()
            > u64::MAX);
    }
    #[test]
    fn signed_sign_dominates() {
        let minus_five = BigIInt::from(-5);
        let minus_three = BigIInt::from(-3);
        let three = BigIInt::from(3);
        assert!(minus_five < three);
        assert!(minus_five < minus_three);
        assert!(three > minus_three);
        assert!(BigIInt::zero() > minus_three);
    }
}

mod add_sub {
    use super::*;

    #[test]
    fn carry_creates_new_limb() {
        let num = "4294967295".parse::<BigUInt>().unwrap() + BigUInt::one();
        assert_eq!(num.limbs(), [0, 1]);
    }
    #[test]
    fn identity_and_inverse() {
        let num = "987654321987654321".parse::<BigUInt>().unwrap();
        assert_eq!(&num + BigUInt::zero(), num);
        assert_eq!(&num - &num, BigUInt::zero());
    }
    #[test]
    fn laws_hold_for_random_numbers() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..20 {
            let a = BigUInt::new_random(1..=40, &mut rng);
            let b = BigUInt::new_random(1..=40, &mut rng);
            let c = BigUInt::new_random(1..=40, &mut rng);
            assert_eq!(&a + &b, &b + &a, "failed with seed {seed:?}");
            assert_eq!(
                (&a + &b) + &c,
                &a + (&b + &c),
                "failed with seed {seed:?}"
            );
            assert_eq!((&a + &b) - &b, a, "failed with seed {seed:?}");
        }
    }
    #[test]
    #[should_panic(expected = "result would be negative")]
    fn underflow_is_a_contract_violation() {
        let _ = BigUInt::from_digit(3) - BigUInt::from_digit(5);
    }
    #[test]
    fn scalar_fast_paths() {
        assert_eq!((BigUInt::from(0xffff_ffffu32) + 1u32).limbs(), [0, 1]);
        assert_eq!(BigUInt::from(0x1_0000_0000u64) - 1u32, BigUInt::from(0xffff_ffffu32));
    }
    #[test]
    fn increment_and_decrement_ripple() {
        let mut num = BigUInt::from(0xffff_ffffu32);
        num.increment();
        assert_eq!(num.limbs(), [0, 1]);
        num.decrement();
        assert_eq!(num.limbs(), [0xffff_ffff]);
    }
    #[test]
    #[should_panic(expected = "can't decrement zero")]
    fn decrementing_zero_is_a_contract_violation() {
        BigUInt::zero().decrement();
    }
}

mod mul {
    use super::*;

    #[test]
    fn max_square() {
        let num = BigUInt::from_digits([4_294_967_295, 4_294_967_295]);
        assert_eq!(
            (&num * &num).limbs(),
            [1, 0, 4_294_967_294, 4_294_967_295]
        );
    }
    #[test]
    fn identity_and_zero() {
        let num = "987654321987654321".parse::<BigUInt>().unwrap();
        assert_eq!(&num * BigUInt::one(), num);
        assert!((&num * BigUInt::zero()).is_zero());
    }
    #[test]
    fn threshold_does_not_change_the_product() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..10 {
            let a = BigUInt::new_random(1..=60, &mut rng);
            let b = BigUInt::new_random(1..=60, &mut rng);
            let reference = a.mul_with_threshold(&b, KaratsubaThreshold::default());
            for threshold in [0, 2, 5] {
                assert_eq!(
                    a.mul_with_threshold(&b, KaratsubaThreshold::new(threshold)),
                    reference,
                    "failed at threshold {threshold} with seed {seed:?}"
                );
            }
            assert_eq!(&a * &b, &b * &a, "failed with seed {seed:?}");
        }
    }
    #[test]
    fn distributes_over_addition() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..10 {
            let a = BigUInt::new_random(1..=30, &mut rng);
            let b = BigUInt::new_random(1..=30, &mut rng);
            let c = BigUInt::new_random(1..=30, &mut rng);
            assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c,
                "failed with seed {seed:?}"
            );
        }
    }
}

mod div {
    use super::*;

    #[test]
    fn multi_limb_quotient_and_remainder() {
        let dividend = "193337807559688298930754147171641093868975707"
            .parse::<BigUInt>()
            .unwrap();
        let divisor = "4490169110513596108074543157".parse::<BigUInt>().unwrap();
        let (quotient, remainder) = dividend.div_mod(&divisor).unwrap();
        assert_eq!(quotient.to_string(), "43058023606949152");
        assert_eq!(remainder.to_string(), "1933748539936698160940422843");
    }
    #[test]
    fn remainder_comes_from_the_same_division() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..20 {
            let a = BigUInt::new_random(1..=40, &mut rng);
            let b = BigUInt::new_random(1..=20, &mut rng);
            assert_eq!(
                (&a / &b) * &b + &a % &b,
                a,
                "failed with seed {seed:?}"
            );
        }
    }
    #[test]
    fn checked_division_by_zero() {
        let num = BigUInt::from_digit(7);
        assert_eq!(num.div_mod(&BigUInt::zero()), Err(DivisionByZero));
        assert_eq!(num.div_mod_digit(0), Err(DivisionByZero));
        assert_eq!(
            BigIInt::from(7).div_mod(&BigIInt::zero()),
            Err(DivisionByZero)
        );
    }
    #[test]
    #[should_panic(expected = "can't divide by zero")]
    fn operator_division_by_zero_panics() {
        let _ = BigUInt::from_digit(7) / BigUInt::zero();
    }
    #[test]
    fn dividend_smaller_than_divisor() {
        let (quotient, remainder) = BigUInt::from_digit(3)
            .div_mod(&BigUInt::from_digit(10))
            .unwrap();
        assert!(quotient.is_zero());
        assert_eq!(remainder, 3u32);
    }
    #[test]
    fn scalar_fast_path_matches_long_division() {
        let num = "340282367000166625996085689103316680705"
            .parse::<BigUInt>()
            .unwrap();
        let (quotient, remainder) = num.div_mod_digit(10).unwrap();
        let (long_quotient, long_remainder) = num.div_mod(&BigUInt::from_digit(10)).unwrap();
        assert_eq!(quotient, long_quotient);
        assert_eq!(long_remainder, remainder);
    }
}

mod pow {
    use super::*;

    #[test]
    fn zero_to_the_zeroth_is_one() {
        assert!(BigUInt::zero().pow(0).is_one());
        assert!(BigUInt::zero().pow(5).is_zero());
    }
    #[test]
    fn matches_repeated_multiplication() {
        let base = "12345678901234567890".parse::<BigUInt>().unwrap();
        let mut expected = BigUInt::one();
        for exp in 0..8 {
            assert_eq!(base.pow(exp), expected);
            expected *= &base;
        }
    }
    #[test]
    fn signed_base() {
        assert_eq!(BigIInt::from(-2).pow(3), BigIInt::from(-8));
        assert_eq!(BigIInt::from(-2).pow(4), BigIInt::from(16));
        assert_eq!(BigIInt::from(-2).pow(0), BigIInt::one());
    }
}

mod signed_ops {
    use super::*;

    #[test]
    fn opposite_numbers_cancel_to_positive_zero() {
        let sum = "-100".parse::<BigIInt>().unwrap() + "100".parse::<BigIInt>().unwrap();
        assert!(sum.is_zero());
        assert_eq!(sum.sign(), Sign::Positive);
    }
    #[test]
    fn sign_tables() {
        let plus = BigIInt::from(100);
        let minus = BigIInt::from(-17);
        assert_eq!(&plus + &minus, BigIInt::from(83));
        assert_eq!(&minus + &plus, BigIInt::from(83));
        assert_eq!(&minus - &plus, BigIInt::from(-117));
        assert_eq!(&plus - &minus, BigIInt::from(117));
        assert_eq!(&plus * &minus, BigIInt::from(-1700));
        assert_eq!(&minus * &minus, BigIInt::from(289));
    }
    #[test]
    fn negation_laws() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..10 {
            let magnitude = unsigned::BigInt::<u32>::new_random(1..=30, &mut rng);
            let x = BigIInt::new(Sign::Negative, magnitude);
            assert!((&x + &-&x).is_zero(), "failed with seed {seed:?}");
            assert!((&x - &x).is_zero(), "failed with seed {seed:?}");
            assert_eq!(&x / &BigIInt::from(-1), -&x, "failed with seed {seed:?}");
        }
    }
    #[test]
    fn division_truncates_towards_zero() {
        let seven = BigIInt::from(7);
        let three = BigIInt::from(3);
        assert_eq!(&-&seven / &three, BigIInt::from(-2));
        assert_eq!(&seven / &-&three, BigIInt::from(-2));
        assert_eq!(&-&seven / &-&three, BigIInt::from(2));
    }
    #[test]
    fn remainder_keeps_the_dividends_sign() {
        let seven = BigIInt::from(7);
        let three = BigIInt::from(3);
        assert_eq!(&seven % &three, BigIInt::from(1));
        assert_eq!(&-&seven % &three, BigIInt::from(-1));
        assert_eq!(&seven % &-&three, BigIInt::from(1));
        assert_eq!(&-&seven % &-&three, BigIInt::from(-1));
    }
    #[test]
    fn division_identity_holds() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..20 {
            let mut a = BigIInt::from(unsigned::BigInt::<u32>::new_random(1..=30, &mut rng));
            let mut b = BigIInt::from(unsigned::BigInt::<u32>::new_random(1..=15, &mut rng));
            if rng.next_u32() % 2 == 0 {
                a.negate();
            }
            if rng.next_u32() % 2 == 0 {
                b.negate();
            }
            assert_eq!(
                (&a / &b) * &b + &a % &b,
                a,
                "failed for {a:?} / {b:?} with seed {seed:?}"
            );
        }
    }
    #[test]
    fn increment_and_decrement_cross_zero() {
        let mut num = BigIInt::from(-1);
        num.increment();
        assert!(num.is_zero());
        assert_eq!(num.sign(), Sign::Positive);
        num.decrement();
        assert_eq!(num, BigIInt::from(-1));
        num.decrement();
        assert_eq!(num, BigIInt::from(-2));
        num.increment();
        num.increment();
        num.increment();
        assert_eq!(num, BigIInt::from(1));
    }
    #[test]
    fn abs_strips_the_sign() {
        let num = BigIInt::from(-42);
        assert_eq!(*num.abs(), 42u32);
        assert_eq!(num.into_abs(), BigUInt::from_digit(42));
    }
}
