//! Agent-submitted packages.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tripnest_shared::{Category, TourPackage, UnknownCategory, PRICE_ON_REQUEST};

use crate::repository::PackageRepository;
use crate::{required, CoreError, CoreResult};

const CURRENCY_SYMBOL: char = '₹';

/// Package form filled in by a travel agent.
///
/// `cities` is a comma-separated list; `price` may be entered with or
/// without the currency symbol. `rating` arrives from a text input, so both
/// `4.5` and `"4.5"` are accepted and a blank string means no rating.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPackageForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub original_price: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub cities: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub agent_id: Option<String>,
}

pub fn build_package(form: AgentPackageForm, now: DateTime<Utc>) -> CoreResult<TourPackage> {
    let title = required("title", form.title.as_deref())?;
    let description = required("description", form.description.as_deref())?;
    let duration = required("duration", form.duration.as_deref())?;
    let price = required("price", form.price.as_deref())?;
    let category = required("category", form.category.as_deref())?;
    let cities = required("cities", form.cities.as_deref())?;

    let category: Category = category
        .trim()
        .parse()
        .map_err(|e: UnknownCategory| CoreError::ValidationError(e.to_string()))?;

    let rating = form.rating.unwrap_or(0.0);
    if !(0.0..=5.0).contains(&rating) {
        return Err(CoreError::ValidationError(format!(
            "rating must be between 0 and 5, got {}",
            rating
        )));
    }

    let cities: Vec<String> = cities
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if cities.is_empty() {
        return Err(CoreError::MissingField("cities"));
    }

    Ok(TourPackage {
        id: format!("pkg-{}", now.timestamp_millis()),
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        cities,
        price: display_price(price),
        original_price: form
            .original_price
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(display_price),
        duration: duration.trim().to_string(),
        rating,
        reviews: 0,
        category,
        featured: false,
        image: form.image.filter(|i| !i.trim().is_empty()),
        highlights: form.highlights,
        agent_id: form.agent_id,
    })
}

/// Builds the package and appends it to the repository.
pub async fn submit<R>(repo: &R, form: AgentPackageForm, now: DateTime<Utc>) -> CoreResult<TourPackage>
where
    R: PackageRepository + ?Sized,
{
    let package = build_package(form, now)?;
    repo.append(package.clone()).await?;
    tracing::info!("Agent package {} added ({})", package.id, package.title);
    Ok(package)
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid rating: {}", text))),
    }
}

fn display_price(raw: &str) -> String {
    let raw = raw.trim();
    if raw == PRICE_ON_REQUEST || raw.starts_with(CURRENCY_SYMBOL) {
        raw.to_string()
    } else {
        format!("{}{}", CURRENCY_SYMBOL, raw)
    }
}
