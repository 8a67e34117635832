use crate::app_context;
use crate::cli::tests::fake_args;
use crate::http::router;
use axum_test::TestServer;

pub fn test_server(upstream_url: &str) -> TestServer {
    let args = fake_args(upstream_url);
    let app_context = app_context::init(&args).expect("Failed to build the app context.");
    let router = router::new(&args, app_context).expect("Failed to build the router.");
    TestServer::new(router).expect("Failed to run test server.")
}
