//! Division, divisibility, gcd, and exponentiation.

use std::ops::{Div, Rem};

use crate::BigUint;

impl BigUint {
    /// Binary long division: returns `(q, r)` with `self = q*d + r` and
    /// `0 <= r < d`.
    ///
    /// Works one bit at a time from the most significant bit of the
    /// dividend: shift the remainder up, bring the next dividend bit down,
    /// and whenever the divisor fits, subtract it and set the matching
    /// quotient bit.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn div_rem(&self, d: &BigUint) -> (BigUint, BigUint) {
        if d.is_zero() {
            panic!("division by zero");
        }

        let mut q = BigUint::new();
        let mut r = BigUint::new();

        for i in (0..self.bit_len()).rev() {
            r = &r << 1;
            if self.bit(i) {
                r.set_bit(0);
            }
            if r >= *d {
                r -= d;
                q.set_bit(i);
            }
        }

        (q, r)
    }

    /// Binary long division by a machine word; the remainder never exceeds
    /// `d` and so lives in a word throughout.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn div_rem_u32(&self, d: u32) -> (BigUint, u32) {
        if d == 0 {
            panic!("division by zero");
        }

        let mut q = BigUint::new();
        let mut r = 0u64;

        for i in (0..self.bit_len()).rev() {
            r = r << 1 | u64::from(self.bit(i));
            if r >= u64::from(d) {
                r -= u64::from(d);
                q.set_bit(i);
            }
        }

        (q, r as u32)
    }

    /// Remainder of division by a machine word, folding the dividend bits
    /// most significant first: `r <- (r*2 + bit) mod d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is zero.
    pub fn rem_u32(&self, d: u32) -> u32 {
        if d == 0 {
            panic!("division by zero");
        }

        let mut r = 0u64;
        for i in (0..self.data.len()).rev() {
            for b in (0..31).rev() {
                r = r << 1 | u64::from(self.data[i] >> b & 1);
                if r >= u64::from(d) {
                    r -= u64::from(d);
                }
            }
        }

        r as u32
    }

    pub fn is_divisible_by(&self, d: u32) -> bool {
        self.rem_u32(d) == 0
    }

    /// Greatest common divisor by the Euclidean remainder chain. Iterative:
    /// each step only needs the previous two values, and the chain can run
    /// long enough to make recursion a stack hazard.
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }
        a
    }

    /// Raises `self` to `exp` by repeated squaring. A zero exponent yields
    /// one.
    pub fn pow(&self, mut exp: u32) -> BigUint {
        let mut rop = BigUint::from(1u32);
        let mut square = self.clone();
        while exp != 0 {
            if exp & 1 != 0 {
                rop = &rop * &square;
            }
            square = &square * &square;
            exp >>= 1;
        }
        rop
    }
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).0
    }
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).1
    }
}
