//! Operator syntax over [`BigInt`]'s named arithmetic methods.
//!
//! `+`, `-`, `*` never fail. `/` and `%` panic on division by zero, the way
//! the fixed-width primitives elsewhere in this crate panic rather than
//! return a `Result` from an operator overload; callers that need the
//! fallible form should call [`BigInt::div_rem`] directly.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::BigInt;

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        BigInt::add(&self, &rhs)
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        BigInt::sub(&self, &rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(&self, &rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt {
        BigInt::div(&self, &rhs).expect("division by zero")
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        BigInt::div(self, rhs).expect("division by zero")
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt {
        BigInt::rem(&self, &rhs).expect("division by zero")
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        BigInt::rem(self, rhs).expect("division by zero")
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(&self)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}
