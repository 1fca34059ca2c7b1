//! First-run data. Only collections without a file are written, so edits
//! made to the data directory survive restarts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tripnest_shared::{Agent, ContactMessage, Destination, Hotel, Testimonial, TourPackage, UserAccount};

use crate::json_store::{Collection, JsonStore, StoreError};

const PACKAGES: &str = include_str!("../seed/packages.json");
const TESTIMONIALS: &str = include_str!("../seed/testimonials.json");
const AGENTS: &str = include_str!("../seed/agents.json");
const DESTINATIONS: &str = include_str!("../seed/destinations.json");
const HOTELS: &str = include_str!("../seed/hotels.json");
const USERS: &str = include_str!("../seed/users.json");

/// Writes seed records for every collection whose file is absent and
/// returns the collections that were created.
pub async fn seed_missing(store: &JsonStore) -> Result<Vec<Collection>, StoreError> {
    let mut seeded = Vec::new();

    for collection in Collection::ALL {
        if store.exists(collection).await {
            continue;
        }

        match collection {
            Collection::Packages => write_seed::<TourPackage>(store, collection, PACKAGES).await?,
            Collection::Testimonials => write_seed::<Testimonial>(store, collection, TESTIMONIALS).await?,
            Collection::Agents => write_seed::<Agent>(store, collection, AGENTS).await?,
            Collection::Destinations => write_seed::<Destination>(store, collection, DESTINATIONS).await?,
            Collection::Hotels => write_seed::<Hotel>(store, collection, HOTELS).await?,
            Collection::Users => write_seed::<UserAccount>(store, collection, USERS).await?,
            Collection::AddedPackages => store.write::<TourPackage>(collection, &[]).await?,
            Collection::Contacts => store.write::<ContactMessage>(collection, &[]).await?,
        }

        tracing::info!("Seeded collection {}", collection);
        seeded.push(collection);
    }

    Ok(seeded)
}

async fn write_seed<T>(store: &JsonStore, collection: Collection, raw: &str) -> Result<(), StoreError>
where
    T: Serialize + DeserializeOwned,
{
    let records: Vec<T> =
        serde_json::from_str(raw).map_err(|source| StoreError::Serialization { collection, source })?;
    store.write(collection, &records).await
}
