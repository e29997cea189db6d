//! Arbitrary-precision signed integer.
//!
//! `BigInt` pairs a [`Sign`] with a magnitude [`LimbVector`], preserving one
//! invariant across every operation: a value representing zero always
//! carries `Sign::NonNeg` (no negative zero). Every arithmetic method here
//! produces a new value; none mutate their operands except the named
//! increment/decrement forms.

mod arith;
mod conv;
mod ops;

use std::cmp::Ordering;

use crate::codec;
use crate::error::BigIntError;
use crate::limb::LimbVector;

/// Sign of a [`BigInt`]. Zero is always [`Sign::NonNeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    NonNeg,
    Neg,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::NonNeg => Sign::Neg,
            Sign::Neg => Sign::NonNeg,
        }
    }

    fn xor(self, other: Sign) -> Sign {
        if self == other { Sign::NonNeg } else { Sign::Neg }
    }
}

/// Arbitrary-precision signed integer.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: Sign,
    magnitude: LimbVector,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt {
            sign: Sign::NonNeg,
            magnitude: LimbVector::zero(),
        }
    }

    /// Parses a signed decimal/hex/octal/binary string, base detected from
    /// its prefix (`0x`, `0b`, leading `0`, or none for base 10).
    pub fn parse(s: &str) -> Result<Self, BigIntError> {
        let (negative, magnitude) = codec::parse(s, None)?;
        Ok(Self::from_sign_magnitude(negative, magnitude))
    }

    /// Parses a signed string in an explicit base (`2`, `8`, `10`, or `16`).
    pub fn parse_radix(s: &str, base: u32) -> Result<Self, BigIntError> {
        let (negative, magnitude) = codec::parse(s, Some(base))?;
        Ok(Self::from_sign_magnitude(negative, magnitude))
    }

    fn from_sign_magnitude(negative: bool, magnitude: LimbVector) -> Self {
        if magnitude.is_zero() {
            BigInt {
                sign: Sign::NonNeg,
                magnitude,
            }
        } else {
            BigInt {
                sign: if negative { Sign::Neg } else { Sign::NonNeg },
                magnitude,
            }
        }
    }

    fn from_parts(sign: Sign, mut magnitude: Vec<u32>) -> Self {
        arith::normalize(&mut magnitude);
        let magnitude = LimbVector::from_limbs(magnitude);
        Self::from_sign_magnitude(sign == Sign::Neg, magnitude)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Neg
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Renders this value in `base` (2, 8, 10, or 16), canonical form.
    pub fn to_string_radix(&self, base: u32) -> Result<String, BigIntError> {
        codec::render(&self.magnitude, self.is_negative(), base)
    }

    /// `-self`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            BigInt {
                sign: self.sign.flip(),
                magnitude: self.magnitude.clone(),
            }
        }
    }

    /// `|self|`.
    pub fn abs(&self) -> Self {
        BigInt {
            sign: Sign::NonNeg,
            magnitude: self.magnitude.clone(),
        }
    }

    /// Same-sign limb-by-limb add; opposite-sign magnitude subtraction with
    /// the result taking the sign of the larger magnitude.
    pub fn add(&self, other: &BigInt) -> Self {
        if self.sign == other.sign {
            let mag = arith::add_magnitude(self.magnitude.as_slice(), other.magnitude.as_slice());
            Self::from_parts(self.sign, mag)
        } else {
            match self.magnitude.cmp(&other.magnitude) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => {
                    let mag = arith::sub_magnitude(
                        self.magnitude.as_slice(),
                        other.magnitude.as_slice(),
                    );
                    Self::from_parts(self.sign, mag)
                }
                Ordering::Less => {
                    let mag = arith::sub_magnitude(
                        other.magnitude.as_slice(),
                        self.magnitude.as_slice(),
                    );
                    Self::from_parts(other.sign, mag)
                }
            }
        }
    }

    /// `self - other`, reusing [`BigInt::add`] after flipping `other`'s sign.
    pub fn sub(&self, other: &BigInt) -> Self {
        self.add(&other.neg())
    }

    /// Schoolbook multiply; result sign is the XOR of operand signs.
    pub fn mul(&self, other: &BigInt) -> Self {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        let mag = arith::mul_magnitude(self.magnitude.as_slice(), other.magnitude.as_slice());
        Self::from_parts(self.sign.xor(other.sign), mag)
    }

    /// Truncated-division quotient and remainder: quotient sign is the XOR
    /// of operand signs, remainder takes the dividend's sign (or is zero).
    pub fn div_rem(&self, other: &BigInt) -> Result<(Self, Self), BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivideByZero);
        }

        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        let (q, r) = arith::divmod_magnitude(self.magnitude.as_slice(), other.magnitude.as_slice());
        let quotient = Self::from_parts(self.sign.xor(other.sign), q);
        let remainder = Self::from_parts(self.sign, r);
        Ok((quotient, remainder))
    }

    /// `self / other`.
    pub fn div(&self, other: &BigInt) -> Result<Self, BigIntError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// `self % other`.
    pub fn rem(&self, other: &BigInt) -> Result<Self, BigIntError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// `self^exp` by square-and-multiply. `exp` is unsigned; `0^0 == 1`.
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut result = BigInt::from(1i64);
        let mut base = self.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Non-negative Euclidean GCD of `|self|` and `|other|`.
    pub fn gcd(&self, other: &BigInt) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();

        while !b.is_zero() {
            let r = a.rem(&b).expect("b is nonzero by loop condition");
            a = b;
            b = r;
        }

        a
    }

    /// Mutates `self` to `self + 1` and returns the new value (pre-increment).
    pub fn increment(&mut self) -> Self {
        *self = self.add(&BigInt::from(1i64));
        self.clone()
    }

    /// Returns the prior value and mutates `self` to `self + 1` (post-increment).
    pub fn post_increment(&mut self) -> Self {
        let prior = self.clone();
        *self = self.add(&BigInt::from(1i64));
        prior
    }

    /// Mutates `self` to `self - 1` and returns the new value (pre-decrement).
    pub fn decrement(&mut self) -> Self {
        *self = self.sub(&BigInt::from(1i64));
        self.clone()
    }

    /// Returns the prior value and mutates `self` to `self - 1` (post-decrement).
    pub fn post_decrement(&mut self) -> Self {
        let prior = self.clone();
        *self = self.sub(&BigInt::from(1i64));
        prior
    }

    /// Magnitude limbs' bytes, little-endian throughout (limb order and
    /// byte order within each limb); the sign is dropped. Callers that need
    /// the sign too should use [`BigInt::sign`] or [`BigInt::to_string_radix`]
    /// alongside this.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.magnitude.len() * 4);
        for &limb in self.magnitude.as_slice() {
            out.extend_from_slice(&limb.to_le_bytes());
        }
        out
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.magnitude == other.magnitude
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNeg, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::NonNeg) => Ordering::Less,
            (Sign::NonNeg, Sign::NonNeg) => self.magnitude.cmp(&other.magnitude),
            (Sign::Neg, Sign::Neg) => other.magnitude.cmp(&self.magnitude),
        }
    }
}
