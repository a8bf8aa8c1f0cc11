use serde::Deserialize;

/// Raw query string pairs, in the order they were sent.
///
/// Repeated keys are kept, [QueryParams::first] picks the first one.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value sent for `key`, if any
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::types::Query;

    fn query_from(query: &str) -> QueryParams {
        Query::<QueryParams>::from_query(query).unwrap().into_inner()
    }

    #[test]
    fn test_first_value_wins() {
        let query = query_from("id=1&id=2");

        assert_eq!(query.first("id"), Some("1"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let query = query_from("ownerid=1&ownerId=5&petId=");

        assert_eq!(query.first("ownerId"), Some("5"));
        assert_eq!(query.first("petId"), Some(""));
        assert_eq!(query.first("id"), None);
    }
}
