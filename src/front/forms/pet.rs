use crate::models;
use serde::Deserialize;

/// Pet payload accepted by the create endpoints.
///
/// Missing fields fall back to their zero value.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PetForm {
    #[serde(deserialize_with = "super::lenient")]
    pub id: i64,
    #[serde(deserialize_with = "super::lenient")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "super::lenient")]
    pub species: String,
    #[serde(deserialize_with = "super::lenient")]
    pub age: i64,
}

impl From<PetForm> for models::pet::Pet {
    fn from(val: PetForm) -> Self {
        models::pet::Pet {
            id: val.id,
            name: val.name,
            species: val.species,
            age: val.age,
        }
    }
}
