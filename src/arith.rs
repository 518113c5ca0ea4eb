//! Additive and multiplicative primitives, and the power-of-two shifts.
//!
//! Every additive loop works in 32-bit storage words: the two 31-bit operand
//! limbs plus an incoming carry always fit, and bit 31 of the sum (or of the
//! wrapped difference) is the carry (or borrow) for the next position.

use std::ops::{Add, AddAssign, Mul, MulAssign, Shl, Shr, Sub, SubAssign};

use crate::biguint::{BigUint, LIMB_BITS, LIMB_MASK};

// ============================================================================
// Addition
// ============================================================================

impl AddAssign<&BigUint> for BigUint {
    /// Carry-propagating addition, low limb to high. Operand limbs are read
    /// before the result limb at the same index is overwritten.
    fn add_assign(&mut self, op2: &BigUint) {
        let nmemb = self.data.len().max(op2.data.len());
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n] + op2.limb(n) + c;
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            self.data.push(c);
        }

        self.compact();
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> BigUint {
        let mut rop = self.clone();
        rop += rhs;
        rop
    }
}

// ============================================================================
// Subtraction
//
// Total only over non-negative results: a borrow surviving the top limb
// means the true difference is negative, which this type cannot represent.
// ============================================================================

impl SubAssign<&BigUint> for BigUint {
    /// Borrow-propagating subtraction.
    ///
    /// # Panics
    ///
    /// Panics if `op2` exceeds `self`.
    fn sub_assign(&mut self, op2: &BigUint) {
        let nmemb = self.data.len().max(op2.data.len());
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n].wrapping_sub(op2.limb(n)).wrapping_sub(c);
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            panic!("subtraction would underflow");
        }

        self.compact();
    }
}

impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> BigUint {
        let mut rop = self.clone();
        rop -= rhs;
        rop
    }
}

impl BigUint {
    /// Subtraction that reports underflow instead of panicking.
    pub fn checked_sub(&self, op2: &BigUint) -> Option<BigUint> {
        if self < op2 { None } else { Some(self - op2) }
    }
}

// ============================================================================
// Scalar addition and subtraction
//
// The scalar plays the second operand: its low 31 bits this step, shifted
// right by 31 for the next. Sizing must cover the scalar itself (two limbs
// for u32, three for u64) even when the big operand is shorter.
// ============================================================================

impl AddAssign<u32> for BigUint {
    fn add_assign(&mut self, mut op2: u32) {
        let nmemb = self.data.len().max(2);
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n] + (op2 & LIMB_MASK) + c;
            op2 >>= 31;
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            self.data.push(c);
        }

        self.compact();
    }
}

impl AddAssign<u64> for BigUint {
    fn add_assign(&mut self, mut op2: u64) {
        let nmemb = self.data.len().max(3);
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n] + (op2 as u32 & LIMB_MASK) + c;
            op2 >>= 31;
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            self.data.push(c);
        }

        self.compact();
    }
}

impl SubAssign<u32> for BigUint {
    /// # Panics
    ///
    /// Panics if `op2` exceeds `self`.
    fn sub_assign(&mut self, mut op2: u32) {
        let nmemb = self.data.len().max(2);
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n].wrapping_sub(op2 & LIMB_MASK).wrapping_sub(c);
            op2 >>= 31;
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            panic!("subtraction would underflow");
        }

        self.compact();
    }
}

impl SubAssign<u64> for BigUint {
    /// # Panics
    ///
    /// Panics if `op2` exceeds `self`.
    fn sub_assign(&mut self, mut op2: u64) {
        let nmemb = self.data.len().max(3);
        self.enlarge(nmemb);

        let mut c = 0;
        for n in 0..nmemb {
            let r = self.data[n]
                .wrapping_sub(op2 as u32 & LIMB_MASK)
                .wrapping_sub(c);
            op2 >>= 31;
            self.data[n] = r & LIMB_MASK;
            c = r >> 31;
        }

        if c != 0 {
            panic!("subtraction would underflow");
        }

        self.compact();
    }
}

macro_rules! scalar_ops {
    ($($scalar:ty),*) => {$(
        impl Add<$scalar> for &BigUint {
            type Output = BigUint;

            fn add(self, rhs: $scalar) -> BigUint {
                let mut rop = self.clone();
                rop += rhs;
                rop
            }
        }

        impl Add<$scalar> for BigUint {
            type Output = BigUint;

            fn add(mut self, rhs: $scalar) -> BigUint {
                self += rhs;
                self
            }
        }

        impl Sub<$scalar> for &BigUint {
            type Output = BigUint;

            fn sub(self, rhs: $scalar) -> BigUint {
                let mut rop = self.clone();
                rop -= rhs;
                rop
            }
        }

        impl Sub<$scalar> for BigUint {
            type Output = BigUint;

            fn sub(mut self, rhs: $scalar) -> BigUint {
                self -= rhs;
                self
            }
        }
    )*};
}

scalar_ops!(u32, u64);

// ============================================================================
// Multiplication
// ============================================================================

/// Schoolbook multiplication into a scratch accumulator.
///
/// Each pair of 31-bit limbs multiplies into at most 62 bits of a u64. The
/// product is injected at limb `n + m` and the carry walked upward until
/// both the product and the carry are exhausted, growing the accumulator on
/// the way if needed.
pub(crate) fn mul_schoolbook(op1: &BigUint, op2: &BigUint) -> BigUint {
    let mut tmp = BigUint {
        data: vec![0; op1.data.len() + op2.data.len()],
    };

    for n in 0..op1.data.len() {
        for m in 0..op2.data.len() {
            let mut r = u64::from(op1.data[n]) * u64::from(op2.data[m]);
            let mut c = 0;
            let mut k = n + m;
            while c != 0 || r != 0 {
                if k >= tmp.data.len() {
                    tmp.data.push(0);
                }
                let s = tmp.data[k] + (r as u32 & LIMB_MASK) + c;
                tmp.data[k] = s & LIMB_MASK;
                c = s >> 31;
                r >>= 31;
                k += 1;
            }
        }
    }

    tmp.compact();
    tmp
}

/// Limb count below which the recursion falls through to schoolbook.
const KARATSUBA_CUTOFF: usize = 32;

/// Karatsuba multiplication: split both operands at the bit boundary
/// `31 * m` where `m` is half the longer operand, recurse three times, and
/// recombine as `z0 + (z1 << 31m) + (z2 << 62m)` with
/// `z1 = (x0 + x1)(y0 + y1) - z2 - z0`.
pub(crate) fn mul_karatsuba(op1: &BigUint, op2: &BigUint) -> BigUint {
    if op1.data.len() < KARATSUBA_CUTOFF || op2.data.len() < KARATSUBA_CUTOFF {
        return mul_schoolbook(op1, op2);
    }

    let m = op1.data.len().max(op2.data.len()) / 2;
    let split = LIMB_BITS * m as u64;

    let x0 = op1.rem_2exp(split);
    let x1 = op1 >> split;
    let y0 = op2.rem_2exp(split);
    let y1 = op2 >> split;

    let z2 = mul_karatsuba(&x1, &y1);
    let z0 = mul_karatsuba(&x0, &y0);

    let mut z1 = mul_karatsuba(&(&x0 + &x1), &(&y0 + &y1));
    z1 -= &z2;
    z1 -= &z0;

    let mut rop = &z0 + &(&z1 << split);
    rop += &(&z2 << (2 * split));
    rop.compact();
    rop
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        mul_karatsuba(self, rhs)
    }
}

impl MulAssign<u32> for BigUint {
    /// Scalar multiplication: one 31x32-bit product plus carry per limb in a
    /// u64 accumulator, remaining carry flushed 31 bits at a time.
    fn mul_assign(&mut self, op2: u32) {
        let mut c = 0u64;
        for n in 0..self.data.len() {
            let r = u64::from(self.data[n]) * u64::from(op2) + c;
            self.data[n] = r as u32 & LIMB_MASK;
            c = r >> 31;
        }

        while c != 0 {
            self.data.push(c as u32 & LIMB_MASK);
            c >>= 31;
        }

        self.compact();
    }
}

impl Mul<u32> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: u32) -> BigUint {
        let mut rop = self.clone();
        rop *= rhs;
        rop
    }
}

impl Mul<u32> for BigUint {
    type Output = BigUint;

    fn mul(mut self, rhs: u32) -> BigUint {
        self *= rhs;
        self
    }
}

// ============================================================================
// Power-of-two shifts
//
// A shift by `b` splits into `words = b / 31` whole limbs and `bits = b % 31`
// straddling bits.
// ============================================================================

impl Shr<u64> for &BigUint {
    type Output = BigUint;

    /// Floor-divides by `2^rhs`. Each output limb is a 64-bit window of the
    /// input, right-shifted and masked back down to 31 bits.
    fn shr(self, b: u64) -> BigUint {
        let words = (b / LIMB_BITS) as usize;
        let bits = (b % LIMB_BITS) as u32;

        let nmemb = self.data.len().saturating_sub(words);
        let mut q = BigUint {
            data: Vec::with_capacity(nmemb),
        };

        if bits == 0 {
            if words < self.data.len() {
                q.data.extend_from_slice(&self.data[words..]);
            }
        } else {
            for i in 0..nmemb {
                q.data.push((self.window64(i + words) >> bits) as u32 & LIMB_MASK);
            }
        }

        q.compact();
        q
    }
}

impl Shl<u64> for &BigUint {
    type Output = BigUint;

    /// Multiplies by `2^rhs`. Sizing uses the conservative `(b + 31) / 31`
    /// limb estimate, one more than necessary when `rhs` is an exact
    /// multiple of 31; the surplus is trimmed before returning.
    fn shl(self, b: u64) -> BigUint {
        let words = ((b + LIMB_BITS) / LIMB_BITS) as usize;
        let word_shift = (b / LIMB_BITS) as usize;
        let bit_shift = (b % LIMB_BITS) as u32;

        let nmemb = self.data.len() + words;
        let mut rop = BigUint {
            data: Vec::with_capacity(nmemb),
        };

        for i in 0..nmemb {
            rop.data.push(if i >= word_shift {
                self.limb_shl(i - word_shift, bit_shift)
            } else {
                0
            });
        }

        rop.compact();
        rop
    }
}

impl Shr<u64> for BigUint {
    type Output = BigUint;

    fn shr(self, b: u64) -> BigUint {
        &self >> b
    }
}

impl Shl<u64> for BigUint {
    type Output = BigUint;

    fn shl(self, b: u64) -> BigUint {
        &self << b
    }
}

impl BigUint {
    /// Remainder modulo `2^b`: the low `b / 31` limbs plus the partially
    /// masked limb above them.
    pub fn rem_2exp(&self, b: u64) -> BigUint {
        let words = (b / LIMB_BITS) as usize;
        let bits = (b % LIMB_BITS) as u32;

        let mut r = BigUint {
            data: vec![0; words + 1],
        };

        let min = words.min(self.data.len());
        r.data[..min].copy_from_slice(&self.data[..min]);
        if bits != 0 {
            r.data[words] = self.limb(words) & ((1 << bits) - 1);
        }

        r.compact();
        r
    }
}
