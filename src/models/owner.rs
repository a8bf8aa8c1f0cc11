use serde::{Deserialize, Serialize};

use super::pet::Pet;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    /// Pets in insertion order
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn find_pet_position(&self, pet_id: i64) -> Option<usize> {
        self.pets.iter().position(|pet| pet.id == pet_id)
    }
}
