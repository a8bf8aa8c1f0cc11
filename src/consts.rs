pub const PLAIN_TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub const QUERY_PARAM_ID: &str = "id";
pub const QUERY_PARAM_OWNER_ID: &str = "ownerId";
pub const QUERY_PARAM_PET_ID: &str = "petId";

pub const PET_DELETED_MSG: &str = "Pet deleted";
