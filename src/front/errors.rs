use derive_more::{Display, Error};
use log::{error, warn};
use ntex::{http, web};

use crate::consts;

fn plain_text_response(status: http::StatusCode, body: String) -> web::HttpResponse {
    web::HttpResponse::build(status)
        .set_header("content-type", consts::PLAIN_TEXT_CONTENT_TYPE)
        .body(body)
}

/// Errors caused by the request itself
#[derive(Debug, Display, Error, PartialEq)]
pub enum UserError {
    #[display("url not found")]
    UrlNotFound,
    #[display("method not allowed")]
    MethodNotAllowed,
    #[display("invalid {_0}")]
    InvalidQueryParam(#[error(not(source))] &'static str),
    #[display("owner {_0} not found")]
    OwnerNotFound(#[error(not(source))] i64),
    #[display("pet {pet_id} not found for owner {owner_id}")]
    PetNotFound { owner_id: i64, pet_id: i64 },
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, req: &web::HttpRequest) -> web::HttpResponse {
        warn!("{} {} -> {}", req.method(), req.uri(), self);

        plain_text_response(self.status_code(), self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            UserError::InvalidQueryParam(_) => http::StatusCode::BAD_REQUEST,
            UserError::OwnerNotFound(_) => http::StatusCode::NOT_FOUND,
            UserError::PetNotFound { .. } => http::StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    InternalServerError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::InternalServerError(msg) => format!("[InternalServerError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        plain_text_response(self.status_code(), "internal server error".to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_user_error_status_codes() {
        assert_eq!(
            UserError::MethodNotAllowed.status_code(),
            http::StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            UserError::InvalidQueryParam("id").status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::OwnerNotFound(1).status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::PetNotFound {
                owner_id: 1,
                pet_id: 2
            }
            .status_code(),
            http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(UserError::InvalidQueryParam("ownerId").to_string(), "invalid ownerId");
        assert_eq!(UserError::OwnerNotFound(3).to_string(), "owner 3 not found");
        assert_eq!(
            UserError::PetNotFound {
                owner_id: 3,
                pet_id: 9
            }
            .to_string(),
            "pet 9 not found for owner 3"
        );
    }
}
