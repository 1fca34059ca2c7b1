use std::sync::Arc;
use std::time::Duration;
use tripnest_core::repository::{
    ContactRepository, DirectoryRepository, PackageRepository, UserRepository,
};
use tripnest_store::{
    JsonStore, StoreContactRepository, StoreDirectoryRepository, StorePackageRepository,
    StoreUserRepository,
};

#[derive(Clone, Debug)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 256 * 1024,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub packages: Arc<dyn PackageRepository>,
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub directory: Arc<dyn DirectoryRepository>,
    pub limits: HttpLimits,
}

impl AppState {
    /// Wires every repository to the same JSON data directory.
    pub fn from_store(store: JsonStore, limits: HttpLimits) -> Self {
        Self {
            packages: Arc::new(StorePackageRepository::new(store.clone())),
            users: Arc::new(StoreUserRepository::new(store.clone())),
            contacts: Arc::new(StoreContactRepository::new(store.clone())),
            directory: Arc::new(StoreDirectoryRepository::new(store)),
            limits,
        }
    }
}
