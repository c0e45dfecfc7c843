mod config;
mod docs;
mod error;
mod state;
mod vrp;

use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi, transform::TransformOpenApi};
use anyhow::Context;
use axum::{Extension, Router, http::Method, serve};
use quicksilver_dispatch::{GreedySolver, solver::solver_params::SolverParams};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{
    config::Config,
    docs::docs_routes,
    state::AppState,
    vrp::routes::{vpr_alias_routes, vrp_routes},
};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const OPENAPI_PATH: &str = "schemas/openapi.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let state = Arc::new(AppState {
        solver: GreedySolver::new(SolverParams {
            average_speed: config.average_speed,
        }),
    });

    let (router, api) = build_app(state);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        let spec = serde_json::to_string_pretty(&api)?;
        std::fs::write(OPENAPI_PATH, spec)
            .with_context(|| format!("Failed to write {OPENAPI_PATH}"))?;
        info!("OpenAPI specification has been written to {OPENAPI_PATH}");
        return Ok(());
    }

    let app = with_layers(router, api);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, average_speed = config.average_speed.value(), "Quicksilver listening");

    serve(listener, app).await?;

    Ok(())
}

pub(crate) fn build_app(state: Arc<AppState>) -> (Router, OpenApi) {
    let mut api = OpenApi::default();

    let router = ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .nest_api_service("/vrp", vrp_routes(state.clone()))
        .nest_api_service("/vpr", vpr_alias_routes(state))
        .finish_api_with(&mut api, api_docs);

    (router, api)
}

pub(crate) fn with_layers(router: Router, api: OpenApi) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    router
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Quicksilver Dispatch API")
}
