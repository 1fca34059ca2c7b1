use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tripnest_shared::PRICE_ON_REQUEST;

use crate::ParseOptionError;

/// Numeric reading of a display price such as "₹45,999".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackagePrice {
    Amount(i64),
    /// The agent quotes per inquiry
    OnRequest,
    /// Anything that does not start with a number once currency formatting is removed
    Unparsed,
}

impl PackagePrice {
    /// Strips the rupee symbol and thousands separators, then reads the
    /// leading integer. Trailing text ("/night") is ignored.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == PRICE_ON_REQUEST {
            return PackagePrice::OnRequest;
        }

        let cleaned: String = raw.chars().filter(|c| *c != '₹' && *c != ',').collect();
        match leading_integer(&cleaned) {
            Some(amount) => PackagePrice::Amount(amount),
            None => PackagePrice::Unparsed,
        }
    }

    pub fn amount(&self) -> Option<i64> {
        match self {
            PackagePrice::Amount(a) => Some(*a),
            _ => None,
        }
    }
}

/// Reads an optionally signed run of digits at the start of `s`,
/// skipping leading whitespace.
pub(crate) fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Price buckets offered by the package filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceRange {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "above-50k")]
    Above50k,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Under10k,
        PriceRange::From10kTo25k,
        PriceRange::From25kTo50k,
        PriceRange::Above50k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Under10k => "under-10k",
            PriceRange::From10kTo25k => "10k-25k",
            PriceRange::From25kTo50k => "25k-50k",
            PriceRange::Above50k => "above-50k",
        }
    }

    /// Both middle buckets are inclusive, so 25,000 falls in each.
    pub fn contains(&self, amount: i64) -> bool {
        match self {
            PriceRange::Under10k => amount < 10_000,
            PriceRange::From10kTo25k => (10_000..=25_000).contains(&amount),
            PriceRange::From25kTo50k => (25_000..=50_000).contains(&amount),
            PriceRange::Above50k => amount > 50_000,
        }
    }

    /// "On Request" passes every bucket; unparsable prices pass none.
    pub fn admits(&self, price: PackagePrice) -> bool {
        match price {
            PackagePrice::Amount(amount) => self.contains(amount),
            PackagePrice::OnRequest => true,
            PackagePrice::Unparsed => false,
        }
    }
}

impl FromStr for PriceRange {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                option: "price range",
                value: s.to_string(),
            })
    }
}
