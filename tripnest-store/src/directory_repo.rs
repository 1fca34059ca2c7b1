use async_trait::async_trait;
use tripnest_core::repository::DirectoryRepository;
use tripnest_shared::{Agent, Destination, Hotel, Testimonial};

use crate::json_store::{Collection, JsonStore};

/// Testimonials, agents, destinations and hotels. Read-only.
#[derive(Debug, Clone)]
pub struct StoreDirectoryRepository {
    store: JsonStore,
}

impl StoreDirectoryRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DirectoryRepository for StoreDirectoryRepository {
    async fn testimonials(&self) -> Vec<Testimonial> {
        self.store.read(Collection::Testimonials).await
    }

    async fn agents(&self) -> Vec<Agent> {
        self.store.read(Collection::Agents).await
    }

    async fn destinations(&self) -> Vec<Destination> {
        self.store.read(Collection::Destinations).await
    }

    async fn hotels(&self) -> Vec<Hotel> {
        self.store.read(Collection::Hotels).await
    }
}
