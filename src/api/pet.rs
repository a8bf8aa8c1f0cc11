//! # Pet API Module
//!
//! Adding pets to an owner and removing them. Pet ids come from one counter
//! shared by all owners.

use crate::{front, models, repo};
use log::info;

/// Adds a new pet to an existing owner.
///
/// Any id in the payload is discarded, the store assigns the next pet id.
///
/// # Arguments
/// * `owner_id` - ID of the owner receiving the pet
/// * `pet_info` - Pet payload (name, type, age)
/// * `repo` - Repository instance
///
/// # Returns
/// * `anyhow::Result<Option<models::pet::Pet>>` - The stored pet, or `None`
///   when the owner does not exist (nothing is stored in that case)
pub async fn add_pet_to_owner(
    owner_id: i64,
    pet_info: front::forms::pet::PetForm,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Option<models::pet::Pet>> {
    let pet = models::pet::Pet {
        id: 0,
        ..pet_info.into()
    };

    let pet = repo.insert_pet(owner_id, pet).await?;

    if let Some(pet) = &pet {
        info!("pet {} added to owner {owner_id}", pet.id);
    }
    Ok(pet)
}

/// Removes a pet from the named owner.
///
/// The pet is only looked up among that owner's pets, an id belonging to
/// another owner yields [repo::PetRemoval::PetNotFound].
pub async fn remove_pet_from_owner(
    owner_id: i64,
    pet_id: i64,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<repo::PetRemoval> {
    let removal = repo.delete_pet(owner_id, pet_id).await?;

    if let repo::PetRemoval::Removed(_) = removal {
        info!("pet {pet_id} removed from owner {owner_id}");
    }
    Ok(removal)
}
