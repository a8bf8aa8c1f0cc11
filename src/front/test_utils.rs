use ntex::web::{WebResponse, test};

/// Builds the full application around `$repo`, the way the server mounts it
macro_rules! test_app {
    ($repo:expr) => {
        ntex::web::test::init_service(
            ntex::web::App::new()
                .state($crate::front::AppState {
                    repo: Box::new($repo),
                })
                .configure($crate::front::routes::owners)
                .configure($crate::front::routes::pets)
                .default_service(ntex::web::route().to($crate::front::server::serve_not_found)),
        )
        .await
    };
}

pub(crate) use test_app;

pub async fn read_text(resp: WebResponse) -> String {
    String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
}
