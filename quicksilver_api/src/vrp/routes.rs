use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post_with};
use axum::routing::post;

use crate::{state::AppState, vrp::post_handler::post_handler};

pub fn vrp_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route(
            "/greedy",
            post_with(post_handler, |op| {
                op.description(
                    "Assigns every task to the first courier that can still carry it and \
                     reach both ends within their windows.",
                )
            }),
        )
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}

/// `/vpr/greedy`, the misspelt path earlier clients still post to. Left out of the docs.
pub fn vpr_alias_routes(state: Arc<AppState>) -> ApiRouter {
    ApiRouter::new()
        .route("/greedy", post(post_handler))
        .with_state(state)
}
