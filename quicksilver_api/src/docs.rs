use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter, IntoApiResponse,
        routing::{get, get_with},
    },
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

use crate::state::AppState;

const API_JSON_PATH: &str = "/docs/private/api.json";

pub fn docs_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/",
            get_with(
                Scalar::new(API_JSON_PATH)
                    .with_title("Quicksilver")
                    .axum_handler(),
                |op| op.description("Dispatch API reference."),
            ),
        )
        .api_route(
            "/swagger",
            get_with(
                Swagger::new(API_JSON_PATH)
                    .with_title("Quicksilver")
                    .axum_handler(),
                |op| op.description("Dispatch API reference (Swagger UI)."),
            ),
        )
        .route("/private/api.json", get(serve_docs))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}
