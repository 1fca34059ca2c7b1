use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;
use tripnest_shared::{Category, TourPackage};

use crate::duration::DurationBucket;
use crate::pricing::{PackagePrice, PriceRange};
use crate::ParseOptionError;

/// Maximum number of packages returned by a query.
pub const DISPLAY_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Featured,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Rating,
        SortBy::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Rating => "rating",
            SortBy::Reviews => "reviews",
        }
    }
}

impl FromStr for SortBy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                option: "sort order",
                value: s.to_string(),
            })
    }
}

/// Filter and sort configuration for the package listing.
///
/// Every filter is optional and `None` means "don't filter". The default
/// query returns the first [`DISPLAY_LIMIT`] packages, featured first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageQuery {
    /// Case-insensitive substring of the title, any city, or the description
    pub search_term: Option<String>,
    pub category: Option<Category>,
    pub price_range: Option<PriceRange>,
    pub duration: Option<DurationBucket>,
    /// Keep packages rated at least this high
    pub min_rating: Option<f64>,
    pub sort_by: SortBy,
}

impl PackageQuery {
    /// Filters, sorts and truncates `packages`.
    ///
    /// All sorts are stable, so packages that compare equal keep their input
    /// order. Packages without a numeric price sort after every priced
    /// package for both price orders.
    pub fn apply(&self, packages: Vec<TourPackage>) -> Vec<TourPackage> {
        let needle = self
            .search_term
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<TourPackage> = packages
            .into_iter()
            .filter(|p| needle.as_deref().map_or(true, |n| matches_term(p, n)))
            .filter(|p| self.category.map_or(true, |c| p.category == c))
            .filter(|p| {
                self.price_range
                    .map_or(true, |r| r.admits(PackagePrice::parse(&p.price)))
            })
            .filter(|p| self.duration.map_or(true, |d| d.matches(&p.duration)))
            .filter(|p| self.min_rating.map_or(true, |min| p.rating >= min))
            .collect();

        let total = matched.len();
        sort_packages(&mut matched, self.sort_by);
        matched.truncate(DISPLAY_LIMIT);

        tracing::debug!(
            "Package query matched {} packages, returning {}",
            total,
            matched.len()
        );
        matched
    }
}

fn matches_term(package: &TourPackage, needle: &str) -> bool {
    package.title.to_lowercase().contains(needle)
        || package
            .cities
            .iter()
            .any(|city| city.to_lowercase().contains(needle))
        || package.description.to_lowercase().contains(needle)
}

fn sort_packages(packages: &mut [TourPackage], sort_by: SortBy) {
    match sort_by {
        SortBy::Featured => packages.sort_by_key(|p| !p.featured),
        SortBy::PriceLow => packages.sort_by_cached_key(|p| {
            let amount = PackagePrice::parse(&p.price).amount();
            (amount.is_none(), amount)
        }),
        SortBy::PriceHigh => packages.sort_by_cached_key(|p| {
            let amount = PackagePrice::parse(&p.price).amount();
            (amount.is_none(), Reverse(amount))
        }),
        SortBy::Rating => packages.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Reviews => packages.sort_by_key(|p| Reverse(p.reviews)),
    }
}
