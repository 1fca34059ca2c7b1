pub mod account_repo;
pub mod app_config;
pub mod directory_repo;
pub mod json_store;
pub mod package_repo;
pub mod seed;

pub use account_repo::{StoreContactRepository, StoreUserRepository};
pub use directory_repo::StoreDirectoryRepository;
pub use json_store::{Collection, JsonStore, StoreError};
pub use package_repo::StorePackageRepository;
