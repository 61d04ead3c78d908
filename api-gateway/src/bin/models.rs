//! Models Lambda - Handles /v1/models endpoint.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{json_response, method_not_allowed, ApiResponse};
use shared::list_models;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    if event.method() != "GET" {
        return method_not_allowed("GET");
    }

    json_response(200, &ApiResponse::success(list_models()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
