// SPDX-License-Identifier: MPL-2.0
pub mod digits;
pub mod math_algos;
pub mod signed;
pub mod unsigned;

/// The limb count at which multiplication switches from the schoolbook
/// algorithm to karatsuba. Passed explicitly so callers can tune the cutover
/// per call instead of through shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KaratsubaThreshold(usize);

impl KaratsubaThreshold {
    pub const fn new(limbs: usize) -> Self {
        Self(limbs)
    }
    pub const fn get(self) -> usize {
        self.0
    }
}
impl Default for KaratsubaThreshold {
    /// empirically useful values lie around 70..320 limbs
    fn default() -> Self {
        Self(70)
    }
}

/// error of checked division, see [`unsigned::BigInt::div_mod`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("division by zero")]
pub struct DivisionByZero;

#[cfg(test)]
mod tests;
