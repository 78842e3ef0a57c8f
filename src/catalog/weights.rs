//! Category weights expressed as shares of the 256-bit seed range

use crate::io::error::{GenerationError, Result, invalid_parameter};
use num_bigint::BigUint;
use num_traits::{Num, One, ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Largest value a seed can take, `2^256 - 1`
pub static MAX_UINT256: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::one() << 256_usize) - BigUint::one());

/// Likelihood mass of one trait value within its category
///
/// A value is selected when the running sum of weights first reaches the
/// drawn seed, so a weight of `MAX_UINT256 / k` gives roughly a `1/k` chance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(BigUint);

impl Weight {
    /// Wrap a raw integer weight
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Weight covering `numerator / denominator` of the seed range
    ///
    /// Uses truncating integer division on `MAX_UINT256 * numerator`, so a
    /// category of `k` equal shares can fall a few units short of the range.
    ///
    /// # Errors
    ///
    /// Returns an error if `denominator` is zero
    pub fn fraction(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(invalid_parameter(
                "denominator",
                &denominator,
                &"must be non-zero",
            ));
        }
        Ok(Self(&*MAX_UINT256 * numerator / denominator))
    }

    /// Underlying integer value
    pub const fn value(&self) -> &BigUint {
        &self.0
    }

    /// Check whether this weight can never be selected
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Approximate probability mass as a share of the seed range
    pub fn expected_share(&self) -> f64 {
        let range = MAX_UINT256.to_f64().unwrap_or(f64::MAX);
        self.0.to_f64().unwrap_or(0.0) / range
    }
}

impl From<u64> for Weight {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses `"n/d"` shares, `0x`-prefixed hex, or plain decimal integers
impl FromStr for Weight {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = numerator
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid_parameter("weight", &s, &e))?;
            let denominator = denominator
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid_parameter("weight", &s, &e))?;
            return Self::fraction(numerator, denominator);
        }

        let parsed = match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex_digits) => BigUint::from_str_radix(hex_digits, 16),
            None => BigUint::from_str_radix(text, 10),
        };

        parsed
            .map(Self)
            .map_err(|e| invalid_parameter("weight", &s, &e))
    }
}

/// Sum a sequence of weights without overflow
pub fn total_weight<'a>(weights: impl IntoIterator<Item = &'a Weight>) -> BigUint {
    weights
        .into_iter()
        .fold(BigUint::zero(), |acc, weight| acc + weight.value())
}

/// Check whether weights reach the top of the seed range
///
/// Categories that fall short send the highest seeds to their last entry.
pub fn covers_seed_range<'a>(weights: impl IntoIterator<Item = &'a Weight>) -> bool {
    total_weight(weights) >= *MAX_UINT256
}
