use async_trait::async_trait;
use tripnest_shared::{
    Agent, ContactMessage, Destination, Hotel, Testimonial, TourPackage, UserAccount,
};

use crate::CoreResult;

/// Repository trait for package data access.
///
/// Reads never fail: a backend that cannot load its data reports an empty
/// list. Only writes surface errors.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Every package on offer: seed packages first, then agent-added ones.
    /// Identifiers are not deduplicated.
    async fn list_all(&self) -> Vec<TourPackage>;

    async fn find(&self, id: &str) -> Option<TourPackage> {
        self.list_all().await.into_iter().find(|p| p.id == id)
    }

    /// Appends an agent-submitted package. Existing packages are never touched.
    async fn append(&self, package: TourPackage) -> CoreResult<()>;
}

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Vec<UserAccount>;

    async fn append_user(&self, user: UserAccount) -> CoreResult<()>;
}

/// Repository trait for contact form messages
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list_contacts(&self) -> Vec<ContactMessage>;

    async fn append_contact(&self, contact: ContactMessage) -> CoreResult<()>;
}

/// Read-only reference collections
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn testimonials(&self) -> Vec<Testimonial>;

    async fn agents(&self) -> Vec<Agent>;

    async fn destinations(&self) -> Vec<Destination>;

    async fn hotels(&self) -> Vec<Hotel>;
}
