use serde::{Deserialize, Serialize};

/// A pet, always owned by exactly one [Owner](super::owner::Owner).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub age: i64,
}
