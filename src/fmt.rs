//! Base-10 parsing and formatting.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::BigUint;

/// Error returned when parsing a decimal string into a [`BigUint`] fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBigUintError {
    invalid: Option<char>,
}

impl fmt::Display for ParseBigUintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.invalid {
            Some(c) => write!(f, "invalid digit `{c}` in decimal string"),
            None => write!(f, "cannot parse integer from empty string"),
        }
    }
}

impl Error for ParseBigUintError {}

impl FromStr for BigUint {
    type Err = ParseBigUintError;

    /// Parses a base-10 string, one digit at a time: multiply the
    /// accumulator by ten, add the digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigUintError { invalid: None });
        }

        let mut rop = BigUint::new();
        for c in s.chars() {
            let digit = c
                .to_digit(10)
                .ok_or(ParseBigUintError { invalid: Some(c) })?;
            rop *= 10;
            rop += digit;
        }
        Ok(rop)
    }
}

impl fmt::Display for BigUint {
    /// Emits base 10 by collecting residues of repeated division by ten and
    /// reversing them. Zero prints as `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = Vec::new();
        let mut n = self.clone();
        while !n.is_zero() {
            let (q, digit) = n.div_rem_u32(10);
            digits.push(b'0' + digit as u8);
            n = q;
        }
        if digits.is_empty() {
            digits.push(b'0');
        }

        let s: String = digits.iter().rev().map(|&d| char::from(d)).collect();
        f.pad_integral(true, "", &s)
    }
}
