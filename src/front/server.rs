//! Handlers not linked to a specific url

use crate::front::errors;

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<ntex::web::HttpResponse, ntex::web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

#[cfg(test)]
mod tests {
    use ntex::http::{Method, StatusCode};
    use ntex::web::test;

    use crate::{
        front::test_utils::{read_text, test_app},
        repo::memory::InMemoryRepo,
    };

    #[ntex::test]
    async fn test_unknown_paths_are_not_found() {
        let app = test_app!(InMemoryRepo::default());

        for (uri, method) in [
            ("/", Method::GET),
            ("/owners/1", Method::GET),
            ("/owners/pets/1", Method::DELETE),
        ] {
            let req = test::TestRequest::with_uri(uri).method(method).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(read_text(resp).await, "url not found");
        }
    }
}
