//! Arbitrary-precision signed integer arithmetic and supporting numeric
//! utilities.
//!
//! This crate provides exact integer arithmetic for library consumers who
//! need it for cryptographic-adjacent routines, serialization of large
//! identifiers, or exact numerical computation.
//!
//! # Module overview
//!
//! - `hex`
//!   Bidirectional nibble ↔ character mapping used by base-16 I/O.
//!
//! - `bitops`
//!   Leading/trailing zero count, popcount, bit reversal, and lowest-set-bit
//!   isolate/clear on fixed-width unsigned machine words.
//!
//! - `limb`
//!   Owned, normalized little-endian sequence of 32-bit limbs — the storage
//!   `BigInt` builds its magnitude on top of.
//!
//! - `codec`
//!   Parsing and rendering of signed integers in bases 2, 8, 10, and 16.
//!
//! - `bigint`
//!   The arbitrary-precision signed integer type itself: arithmetic,
//!   comparison, string I/O, byte export.
//!
//! - `modarith`
//!   Extended GCD, modular multiply/inverse/power, and Miller–Rabin
//!   primality on fixed-width (`i64`) integers — independent of `BigInt`.
//!
//! # Design goals
//!
//! - No runtime dependencies in the core arithmetic
//! - Explicit, predictable semantics over convenience
//! - Every arithmetic operation is pure with respect to its operands

mod error;

pub mod bigint;
pub mod bitops;
pub mod codec;
pub mod hex;
pub mod limb;
pub mod modarith;

pub use bigint::{BigInt, Sign};
pub use error::BigIntError;
