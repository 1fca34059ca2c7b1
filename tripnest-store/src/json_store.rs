//! Flat-file persistence: one pretty-printed JSON array per collection.
//!
//! There is no locking. Every write replaces the whole file, so two
//! writers racing on the same collection lose one of the updates.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tripnest_core::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Packages,
    /// Packages submitted by agents after seeding
    AddedPackages,
    Testimonials,
    Agents,
    Destinations,
    Hotels,
    Users,
    Contacts,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::Packages,
        Collection::AddedPackages,
        Collection::Testimonials,
        Collection::Agents,
        Collection::Destinations,
        Collection::Hotels,
        Collection::Users,
        Collection::Contacts,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Packages => "packages",
            Collection::AddedPackages => "added_packages",
            Collection::Testimonials => "testimonials",
            Collection::Agents => "agents",
            Collection::Destinations => "destinations",
            Collection::Hotels => "hotels",
            Collection::Users => "users",
            Collection::Contacts => "contacts",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {collection}: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {collection}: {source}")]
    Serialization {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::StorageError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    pub async fn exists(&self, collection: Collection) -> bool {
        tokio::fs::try_exists(self.path_for(collection))
            .await
            .unwrap_or(false)
    }

    /// Loads a collection. A missing or unreadable file yields an empty list.
    pub async fn read<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let path = self.path_for(collection);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Collection {} has no file yet", collection);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Ignoring unparsable collection {}: {}", collection, e);
                Vec::new()
            }
        }
    }

    /// Replaces the whole collection with `records`.
    pub async fn write<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|source| StoreError::Serialization { collection, source })?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io { collection, source })?;
        tokio::fs::write(self.path_for(collection), json)
            .await
            .map_err(|source| StoreError::Io { collection, source })?;

        tracing::debug!("Wrote {} records to {}", records.len(), collection);
        Ok(())
    }

    /// Read-modify-write append. Not atomic across concurrent callers.
    pub async fn append<T>(&self, collection: Collection, record: T) -> Result<(), StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.read(collection).await;
        records.push(record);
        self.write(collection, &records).await
    }
}
