//! Process memory backed repository.
//!
//! All entities live in one [Store] behind a single mutex. Every [AppRepo]
//! method holds the lock for the whole of its store access, so concurrent
//! requests served by different workers never interleave their reads and
//! writes. Nothing survives a restart.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{AppRepo, PetRemoval};
use crate::models;

const FIRST_ID: i64 = 1;

/// Owners in insertion order plus the id counters.
///
/// Counters only move forward, so an id is never handed out twice within a
/// process, even after the entity it named is deleted.
#[derive(Debug)]
pub struct Store {
    owners: Vec<models::owner::Owner>,
    next_owner_id: i64,
    next_pet_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            owners: Vec::new(),
            next_owner_id: FIRST_ID,
            next_pet_id: FIRST_ID,
        }
    }
}

impl Store {
    fn issue_owner_id(&mut self) -> i64 {
        let id = self.next_owner_id;
        self.next_owner_id += 1;
        id
    }

    fn issue_pet_id(&mut self) -> i64 {
        let id = self.next_pet_id;
        self.next_pet_id += 1;
        id
    }

    fn owner_position(&self, owner_id: i64) -> Option<usize> {
        self.owners.iter().position(|owner| owner.id == owner_id)
    }

    fn find_owner_mut(&mut self, owner_id: i64) -> Option<&mut models::owner::Owner> {
        self.owners.iter_mut().find(|owner| owner.id == owner_id)
    }

    pub fn owners(&self) -> &[models::owner::Owner] {
        &self.owners
    }

    pub fn add_owner(&mut self, mut owner: models::owner::Owner) -> models::owner::Owner {
        owner.id = self.issue_owner_id();
        self.owners.push(owner.clone());
        owner
    }

    pub fn add_pet(
        &mut self,
        owner_id: i64,
        mut pet: models::pet::Pet,
    ) -> Option<models::pet::Pet> {
        // the pet id is only consumed once the owner is known to exist
        let position = self.owner_position(owner_id)?;

        pet.id = self.issue_pet_id();
        self.owners[position].pets.push(pet.clone());

        Some(pet)
    }

    pub fn rename_owner(&mut self, owner_id: i64, name: String) -> Option<models::owner::Owner> {
        let owner = self.find_owner_mut(owner_id)?;
        owner.name = name;

        Some(owner.clone())
    }

    pub fn remove_owner(&mut self, owner_id: i64) -> Option<models::owner::Owner> {
        let position = self.owner_position(owner_id)?;

        Some(self.owners.remove(position))
    }

    pub fn remove_pet(&mut self, owner_id: i64, pet_id: i64) -> PetRemoval {
        let Some(owner) = self.find_owner_mut(owner_id) else {
            return PetRemoval::OwnerNotFound;
        };

        match owner.find_pet_position(pet_id) {
            Some(position) => PetRemoval::Removed(owner.pets.remove(position)),
            None => PetRemoval::PetNotFound,
        }
    }
}

/// Cheap to clone: every clone shares the same [Store].
#[derive(Clone, Default)]
pub struct InMemoryRepo {
    store: Arc<Mutex<Store>>,
}

#[async_trait]
impl AppRepo for InMemoryRepo {
    async fn insert_owner(
        &self,
        owner: models::owner::Owner,
    ) -> anyhow::Result<models::owner::Owner> {
        Ok(self.store.lock().await.add_owner(owner))
    }

    async fn insert_pet(
        &self,
        owner_id: i64,
        pet: models::pet::Pet,
    ) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(self.store.lock().await.add_pet(owner_id, pet))
    }

    async fn get_all_owners(&self) -> anyhow::Result<Vec<models::owner::Owner>> {
        Ok(self.store.lock().await.owners().to_vec())
    }

    async fn update_owner_name(
        &self,
        owner_id: i64,
        name: String,
    ) -> anyhow::Result<Option<models::owner::Owner>> {
        Ok(self.store.lock().await.rename_owner(owner_id, name))
    }

    async fn delete_owner(&self, owner_id: i64) -> anyhow::Result<Option<models::owner::Owner>> {
        Ok(self.store.lock().await.remove_owner(owner_id))
    }

    async fn delete_pet(&self, owner_id: i64, pet_id: i64) -> anyhow::Result<PetRemoval> {
        Ok(self.store.lock().await.remove_pet(owner_id, pet_id))
    }
}
