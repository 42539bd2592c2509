//! 128-bit account balances.
//!
//! Balances are raw integer amounts (u128). Higher denominations are fixed
//! powers of ten; conversion happens only at the parse/format boundary, so
//! ledger arithmetic never touches fractions. All arithmetic is checked —
//! the ledger treats overflow and underflow as integrity failures, never as
//! wrap-around.
//!
//! Two byte encodings exist and must not be mixed up: block bodies carry
//! balances big-endian (the bytes that get hashed and signed), while the
//! storage codec writes little-endian.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size of an encoded balance in bytes.
pub const BALANCE_SIZE: usize = 16;

/// Maximum number of fractional digits any unit can produce.
pub const BALANCE_MAX_PRECISION: u32 = 33;

/// A 128-bit unsigned account balance in raw units.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Balance(u128);

/// Denominations, as powers of ten over raw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// 1 raw.
    Raw,
    /// 10^18 raw ("uxrb").
    Micro,
    /// 10^21 raw ("mxrb").
    Milli,
    /// 10^24 raw ("xrb").
    Xrb,
    /// 10^27 raw ("kxrb").
    Kilo,
    /// 10^30 raw ("Mxrb").
    Mega,
    /// 10^33 raw ("Gxrb").
    Giga,
}

impl Unit {
    /// Decimal exponent of this unit relative to raw.
    pub fn exponent(self) -> u32 {
        match self {
            Unit::Raw => 0,
            Unit::Micro => 18,
            Unit::Milli => 21,
            Unit::Xrb => 24,
            Unit::Kilo => 27,
            Unit::Mega => 30,
            Unit::Giga => 33,
        }
    }

    /// Conventional symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Raw => "raw",
            Unit::Micro => "uxrb",
            Unit::Milli => "mxrb",
            Unit::Xrb => "xrb",
            Unit::Kilo => "kxrb",
            Unit::Mega => "Mxrb",
            Unit::Giga => "Gxrb",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("empty balance string")]
    Empty,

    #[error("invalid digit in balance string: {0:?}")]
    InvalidDigit(char),

    #[error("fraction finer than one raw")]
    TooPrecise,

    #[error("balance does not fit in 128 bits")]
    Overflow,

    #[error("balances are {BALANCE_SIZE} bytes, got {0}")]
    BadLength(usize),
}

impl Balance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Big-endian bytes, as embedded in block bodies and block hashes.
    pub fn to_wire_bytes(&self) -> [u8; BALANCE_SIZE] {
        self.0.to_be_bytes()
    }

    pub fn from_wire_bytes(bytes: [u8; BALANCE_SIZE]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Little-endian bytes, as written by the storage codec.
    pub fn to_store_bytes(&self) -> [u8; BALANCE_SIZE] {
        self.0.to_le_bytes()
    }

    pub fn from_store_bytes(bytes: [u8; BALANCE_SIZE]) -> Self {
        Self(u128::from_le_bytes(bytes))
    }

    /// Decode the storage encoding from a slice, checking the length.
    pub fn from_store_slice(data: &[u8]) -> Result<Self, BalanceError> {
        let bytes: [u8; BALANCE_SIZE] = data
            .try_into()
            .map_err(|_| BalanceError::BadLength(data.len()))?;
        Ok(Self::from_store_bytes(bytes))
    }

    /// Parse a decimal string denominated in `unit`.
    ///
    /// Rejects fractions finer than one raw and values over `u128::MAX`.
    pub fn parse(s: &str, unit: Unit) -> Result<Self, BalanceError> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(BalanceError::Empty);
        }

        let frac = frac_part.trim_end_matches('0');
        let exponent = unit.exponent();
        if frac.len() as u32 > exponent {
            return Err(BalanceError::TooPrecise);
        }

        let int = parse_digits(int_part)?;
        let scale = 10u128.pow(exponent);
        let mut raw = int.checked_mul(scale).ok_or(BalanceError::Overflow)?;

        if !frac.is_empty() {
            let frac_scale = 10u128.pow(exponent - frac.len() as u32);
            let frac_raw = parse_digits(frac)? * frac_scale;
            raw = raw.checked_add(frac_raw).ok_or(BalanceError::Overflow)?;
        }

        Ok(Self(raw))
    }

    /// Render as a decimal string denominated in `unit`, truncated to at most
    /// `precision` fractional digits, trailing zeros trimmed.
    pub fn format(&self, unit: Unit, precision: u32) -> String {
        let exponent = unit.exponent();
        if exponent == 0 {
            return self.0.to_string();
        }

        let scale = 10u128.pow(exponent);
        let mut out = (self.0 / scale).to_string();
        let frac = self.0 % scale;

        if frac != 0 && precision > 0 {
            let mut digits = format!("{:0width$}", frac, width = exponent as usize);
            digits.truncate(precision.min(exponent) as usize);
            let digits = digits.trim_end_matches('0');
            if !digits.is_empty() {
                out.push('.');
                out.push_str(digits);
            }
        }

        out
    }
}

fn parse_digits(s: &str) -> Result<u128, BalanceError> {
    let mut value: u128 = 0;
    for c in s.chars() {
        let digit = c.to_digit(10).ok_or(BalanceError::InvalidDigit(c))? as u128;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(BalanceError::Overflow)?;
    }
    Ok(value)
}

impl fmt::Debug for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Balance({} raw)", self.0)
    }
}

/// Renders in Mxrb at maximum precision, like `FromStr` expects.
impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Unit::Mega, BALANCE_MAX_PRECISION))
    }
}

impl FromStr for Balance {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Unit::Mega)
    }
}
