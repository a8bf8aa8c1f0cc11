//! # Owner API Module
//!
//! Owner management: creation, listing, renaming and removal.

use crate::{front, models, repo};
use log::info;

/// Creates a new owner from the request payload.
///
/// The store assigns the owner id; pets sent along with the owner are kept
/// with the ids the client gave them.
///
/// # Arguments
/// * `owner_info` - Owner payload (name and optional pets)
/// * `repo` - Repository instance
///
/// # Returns
/// * `anyhow::Result<models::owner::Owner>` - The stored owner, id included
pub async fn create_owner(
    owner_info: front::forms::owner::OwnerForm,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::owner::Owner> {
    let owner = repo.insert_owner(owner_info.into()).await?;

    info!("owner {} created with {} pets", owner.id, owner.pets.len());
    Ok(owner)
}

/// Returns every owner with its pets, in creation order.
pub async fn list_owners(repo: &repo::ImplAppRepo) -> anyhow::Result<Vec<models::owner::Owner>> {
    repo.get_all_owners().await
}

/// Replaces the owner's name, leaving its pets untouched.
///
/// # Returns
/// * `anyhow::Result<Option<models::owner::Owner>>` - The updated owner, or
///   `None` when `owner_id` does not exist
pub async fn rename_owner(
    owner_id: i64,
    rename_info: front::forms::owner::RenameOwnerForm,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<models::owner::Owner>> {
    let owner = repo.update_owner_name(owner_id, rename_info.name).await?;

    if owner.is_some() {
        info!("owner {owner_id} renamed");
    }
    Ok(owner)
}

/// Removes an owner and all of its pets.
///
/// # Returns
/// * `anyhow::Result<Option<models::owner::Owner>>` - The removed owner, or
///   `None` when `owner_id` does not exist
pub async fn delete_owner(
    owner_id: i64,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<models::owner::Owner>> {
    let owner = repo.delete_owner(owner_id).await?;

    if let Some(owner) = &owner {
        info!("owner {owner_id} deleted along with {} pets", owner.pets.len());
    }
    Ok(owner)
}
