//! Single-record lookups by id.

use tripnest_shared::{Agent, TourPackage};

use crate::repository::{DirectoryRepository, PackageRepository};
use crate::{CoreError, CoreResult};

pub async fn package<R>(repo: &R, id: &str) -> CoreResult<TourPackage>
where
    R: PackageRepository + ?Sized,
{
    repo.find(id)
        .await
        .ok_or_else(|| CoreError::NotFound("Package".to_string()))
}

pub async fn agent<R>(repo: &R, id: &str) -> CoreResult<Agent>
where
    R: DirectoryRepository + ?Sized,
{
    repo.agents()
        .await
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| CoreError::NotFound("Agent".to_string()))
}
