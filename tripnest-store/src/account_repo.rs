use async_trait::async_trait;
use tripnest_core::repository::{ContactRepository, UserRepository};
use tripnest_core::CoreResult;
use tripnest_shared::{ContactMessage, UserAccount};

use crate::json_store::{Collection, JsonStore};

#[derive(Debug, Clone)]
pub struct StoreUserRepository {
    store: JsonStore,
}

impl StoreUserRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn list_users(&self) -> Vec<UserAccount> {
        self.store.read(Collection::Users).await
    }

    async fn append_user(&self, user: UserAccount) -> CoreResult<()> {
        self.store.append(Collection::Users, user).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StoreContactRepository {
    store: JsonStore,
}

impl StoreContactRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactRepository for StoreContactRepository {
    async fn list_contacts(&self) -> Vec<ContactMessage> {
        self.store.read(Collection::Contacts).await
    }

    async fn append_contact(&self, contact: ContactMessage) -> CoreResult<()> {
        self.store.append(Collection::Contacts, contact).await?;
        Ok(())
    }
}
