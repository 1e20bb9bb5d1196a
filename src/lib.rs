// SPDX-License-Identifier: MPL-2.0
pub mod big_int;

pub use big_int::{
    signed::{BigInt as BigIInt, Sign},
    unsigned::{BigInt as BigUInt, FromStrErr},
    DivisionByZero, KaratsubaThreshold,
};

mod util {
    pub mod rng;
}
