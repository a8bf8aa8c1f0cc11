pub mod memory;

use crate::models;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Outcome of removing a pet from an owner.
///
/// Owner and pet absence are kept apart so callers can report which
/// lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PetRemoval {
    Removed(models::pet::Pet),
    OwnerNotFound,
    PetNotFound,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AppRepo {
    /// Stores a new owner under the next owner id and returns it.
    ///
    /// Any id carried by `owner` is replaced. Ids on its nested pets are kept.
    async fn insert_owner(&self, owner: models::owner::Owner)
    -> anyhow::Result<models::owner::Owner>;

    /// Appends `pet` to the owner's pets under the next pet id.
    ///
    /// Returns `None` when no owner has `owner_id`.
    async fn insert_pet(
        &self,
        owner_id: i64,
        pet: models::pet::Pet,
    ) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn get_all_owners(&self) -> anyhow::Result<Vec<models::owner::Owner>>;

    async fn update_owner_name(
        &self,
        owner_id: i64,
        name: String,
    ) -> anyhow::Result<Option<models::owner::Owner>>;

    /// Removes the owner together with its pets, returning what was removed.
    async fn delete_owner(&self, owner_id: i64) -> anyhow::Result<Option<models::owner::Owner>>;

    async fn delete_pet(&self, owner_id: i64, pet_id: i64) -> anyhow::Result<PetRemoval>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
