//! In-memory repositories for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tripnest_shared::{
    Agent, ContactMessage, Destination, Hotel, Testimonial, TourPackage, UserAccount,
};

use crate::repository::{
    ContactRepository, DirectoryRepository, PackageRepository, UserRepository,
};
use crate::CoreResult;

#[derive(Default)]
pub struct MemoryUsers(pub Mutex<Vec<UserAccount>>);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn list_users(&self) -> Vec<UserAccount> {
        self.0.lock().unwrap().clone()
    }

    async fn append_user(&self, user: UserAccount) -> CoreResult<()> {
        self.0.lock().unwrap().push(user);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryContacts(pub Mutex<Vec<ContactMessage>>);

#[async_trait]
impl ContactRepository for MemoryContacts {
    async fn list_contacts(&self) -> Vec<ContactMessage> {
        self.0.lock().unwrap().clone()
    }

    async fn append_contact(&self, contact: ContactMessage) -> CoreResult<()> {
        self.0.lock().unwrap().push(contact);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPackages(pub Mutex<Vec<TourPackage>>);

#[async_trait]
impl PackageRepository for MemoryPackages {
    async fn list_all(&self) -> Vec<TourPackage> {
        self.0.lock().unwrap().clone()
    }

    async fn append(&self, package: TourPackage) -> CoreResult<()> {
        self.0.lock().unwrap().push(package);
        Ok(())
    }
}

/// Directory with agents only; the other collections are empty.
#[derive(Default)]
pub struct MemoryDirectory(pub Vec<Agent>);

#[async_trait]
impl DirectoryRepository for MemoryDirectory {
    async fn testimonials(&self) -> Vec<Testimonial> {
        Vec::new()
    }

    async fn agents(&self) -> Vec<Agent> {
        self.0.clone()
    }

    async fn destinations(&self) -> Vec<Destination> {
        Vec::new()
    }

    async fn hotels(&self) -> Vec<Hotel> {
        Vec::new()
    }
}
