use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal price used by agents who quote per inquiry.
pub const PRICE_ON_REQUEST: &str = "On Request";

/// Package categories offered in the catalogue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adventure,
    Heritage,
    Beach,
    Spiritual,
    Wildlife,
    Honeymoon,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Adventure,
        Category::Heritage,
        Category::Beach,
        Category::Spiritual,
        Category::Wildlife,
        Category::Honeymoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adventure => "adventure",
            Category::Heritage => "heritage",
            Category::Beach => "beach",
            Category::Spiritual => "spiritual",
            Category::Wildlife => "wildlife",
            Category::Honeymoon => "honeymoon",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A bookable tour package.
///
/// `price` is kept exactly as displayed ("₹7,999" or [`PRICE_ON_REQUEST`]);
/// numeric interpretation happens in the catalog crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub cities: Vec<String>,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub duration: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}
