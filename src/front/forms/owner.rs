use crate::models;
use serde::Deserialize;

use super::pet::PetForm;

/// Owner payload for `POST /owners`.
///
/// A top-level `id` is not read, the store assigns one. Nested pets keep
/// whatever ids the client sent.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OwnerForm {
    #[serde(deserialize_with = "super::lenient")]
    pub name: String,
    #[serde(deserialize_with = "super::lenient")]
    pub pets: Vec<PetForm>,
}

impl From<OwnerForm> for models::owner::Owner {
    fn from(val: OwnerForm) -> Self {
        models::owner::Owner {
            id: 0,
            name: val.name,
            pets: val.pets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `PUT /owners/update`, only the name is taken into account
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenameOwnerForm {
    #[serde(deserialize_with = "super::lenient")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_form_ignores_top_level_id() {
        let form = serde_json::from_str::<OwnerForm>(
            r#"{"id": 7, "name": "Alice", "pets": [{"id": 3, "name": "Rex", "type": "dog", "age": 4}]}"#,
        )
        .unwrap();

        let owner: models::owner::Owner = form.into();

        assert_eq!(owner.id, 0);
        assert_eq!(owner.name, "Alice");
        assert_eq!(
            owner.pets,
            vec![models::pet::Pet {
                id: 3,
                name: "Rex".into(),
                species: "dog".into(),
                age: 4,
            }]
        );
    }

    #[test]
    fn test_owner_form_missing_fields_are_zero_valued() {
        let form = serde_json::from_str::<OwnerForm>(r#"{"pets": [{"name": "Tom"}]}"#).unwrap();

        assert_eq!(form.name, "");
        assert_eq!(
            form.pets,
            vec![PetForm {
                name: "Tom".into(),
                ..Default::default()
            }]
        );
    }
}
