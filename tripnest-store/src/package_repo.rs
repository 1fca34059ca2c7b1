use async_trait::async_trait;
use tripnest_core::repository::PackageRepository;
use tripnest_core::CoreResult;
use tripnest_shared::TourPackage;

use crate::json_store::{Collection, JsonStore};

/// Serves the seeded catalogue merged with agent submissions.
///
/// Agent packages live in their own collection so the seed file is never
/// rewritten by the submission flow.
#[derive(Debug, Clone)]
pub struct StorePackageRepository {
    store: JsonStore,
}

impl StorePackageRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PackageRepository for StorePackageRepository {
    async fn list_all(&self) -> Vec<TourPackage> {
        let mut packages: Vec<TourPackage> = self.store.read(Collection::Packages).await;
        let added: Vec<TourPackage> = self.store.read(Collection::AddedPackages).await;
        packages.extend(added);
        packages
    }

    async fn append(&self, package: TourPackage) -> CoreResult<()> {
        self.store.append(Collection::AddedPackages, package).await?;
        Ok(())
    }
}
