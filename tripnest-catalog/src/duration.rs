use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::pricing::leading_integer;
use crate::ParseOptionError;

/// Trip length buckets. Durations are free text such as "5D/4N".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DurationBucket {
    #[serde(rename = "1-3 Days")]
    UpToThree,
    #[serde(rename = "4-7 Days")]
    FourToSeven,
    #[serde(rename = "8-14 Days")]
    EightToFourteen,
    #[serde(rename = "15+ Days")]
    FifteenPlus,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::UpToThree,
        DurationBucket::FourToSeven,
        DurationBucket::EightToFourteen,
        DurationBucket::FifteenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::UpToThree => "1-3 Days",
            DurationBucket::FourToSeven => "4-7 Days",
            DurationBucket::EightToFourteen => "8-14 Days",
            DurationBucket::FifteenPlus => "15+ Days",
        }
    }

    /// The first three buckets look for a day token inside the string;
    /// "15+ Days" reads the leading number instead.
    pub fn matches(&self, duration: &str) -> bool {
        let days: RangeInclusive<u32> = match self {
            DurationBucket::UpToThree => 1..=3,
            DurationBucket::FourToSeven => 4..=7,
            DurationBucket::EightToFourteen => 8..=14,
            DurationBucket::FifteenPlus => {
                return leading_integer(duration).is_some_and(|n| n >= 15);
            }
        };

        day_tokens(duration).any(|d| days.contains(&d))
    }
}

impl FromStr for DurationBucket {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationBucket::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                option: "duration",
                value: s.to_string(),
            })
    }
}

/// Yields every `<N>D` token in `s`, where N is a whole run of digits.
/// "12D" yields 12 only; the trailing "2D" is not a token of its own.
fn day_tokens(s: &str) -> impl Iterator<Item = u32> + '_ {
    let bytes = s.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() {
            if !bytes[pos].is_ascii_digit() {
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }

            if bytes.get(pos) == Some(&b'D') {
                if let Ok(days) = s[start..pos].parse::<u32>() {
                    return Some(days);
                }
            }
        }
        None
    })
}
