//! Constructors from machine integers, and string I/O trait impls.

use std::fmt;
use std::str::FromStr;

use crate::limb::LimbVector;

use super::{BigInt, Sign};

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Neg } else { Sign::NonNeg };
        let mag = value.unsigned_abs();
        BigInt {
            sign,
            magnitude: LimbVector::from_limbs(vec![mag as u32, (mag >> 32) as u32]),
        }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt {
            sign: Sign::NonNeg,
            magnitude: LimbVector::from_limbs(vec![value as u32, (value >> 32) as u32]),
        }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        BigInt::from(value as i64)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::from(value as u64)
    }
}

impl FromStr for BigInt {
    type Err = crate::error::BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            &self
                .to_string_radix(10)
                .expect("base 10 is always a valid radix"),
        )
    }
}
