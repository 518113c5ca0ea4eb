//! Arbitrary-precision unsigned integer arithmetic on 31-bit limbs.
//!
//! Limbs are 31-bit digits held in 32-bit storage words, least significant
//! first. The spare top bit of each word captures the carry or borrow of one
//! additive step, so the additive inner loops stay plain unsigned
//! arithmetic with no double-width or checked-overflow intrinsics.
//!
//! Multiplication is schoolbook below 32 limbs and Karatsuba above; division
//! is binary long division; base-10 parsing and printing go through the
//! word-sized quotient-remainder primitive.
//!
//! ```
//! use bignum::BigUint;
//!
//! let n = BigUint::from(3u32).pow(63);
//! assert_eq!(n.to_string(), "1144561273430837494885949696427");
//! ```

mod arith;
mod biguint;
mod div;
mod fmt;


pub use biguint::BigUint;
pub use fmt::ParseBigUintError;
