use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use jiff::Timestamp;
use quicksilver_dispatch::json::types::{JsonDispatchRequest, JsonDispatchResponse};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{Span, info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema, Debug, Default)]
pub struct DispatchQuery {
    /// Include the schedule of every route in the response.
    #[serde(default)]
    pub schedule: bool,
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DispatchQuery>,
    body: Result<Json<JsonDispatchRequest>, JsonRejection>,
) -> Result<Json<JsonDispatchResponse>, ApiError> {
    let received_at = Timestamp::now();

    let Json(request) = body.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
    })?;

    info!(
        couriers = request.couriers.len(),
        tasks = request.tasks.len(),
        "Dispatch request received"
    );

    let span = Span::current();
    let response = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        request.solve(received_at, &state.solver, query.schedule)
    })
    .await
    .map_err(anyhow::Error::from)??;

    info!(
        routes = response.routes.len(),
        unassigned = response.unassigned.len(),
        "Dispatch request solved"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use quicksilver_dispatch::GreedySolver;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::{build_app, with_layers};

    use super::*;

    fn app() -> Router {
        let (router, api) = build_app(Arc::new(AppState {
            solver: GreedySolver::default(),
        }));
        with_layers(router, api)
    }

    async fn post(uri: &str, body: String) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn request_body() -> Value {
        json!({
            "start_time": "2025-06-10T08:00:00Z",
            "couriers": [
                {
                    "guid": "small",
                    "start_point": { "lat": 55.75, "lon": 37.62 },
                    "capacity": { "volume": 1.0, "weight": 1.0 },
                    "pickup_duration": 120,
                    "drop_duration": 60
                },
                {
                    "guid": "large",
                    "start_point": { "lat": 55.75, "lon": 37.62 },
                    "capacity": { "volume": 10.0, "weight": 10.0 },
                    "pickup_duration": 120,
                    "drop_duration": 60
                }
            ],
            "tasks": [
                {
                    "guid": "t1",
                    "sender_point": { "lat": 55.75, "lon": 37.63 },
                    "recipient_point": { "lat": 55.76, "lon": 37.64 },
                    "capacity": { "volume": 5.0, "weight": 5.0 }
                },
                {
                    "guid": "t2",
                    "sender_point": { "lat": 55.75, "lon": 37.63 },
                    "recipient_point": { "lat": 55.76, "lon": 37.64 },
                    "capacity": { "volume": 50.0, "weight": 50.0 }
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_post_greedy() {
        let (status, body) = post("/vrp/greedy", request_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "routes": [{ "courier_guid": "large", "route": ["t1"] }],
                "unassigned": ["t2"]
            })
        );
    }

    #[tokio::test]
    async fn test_post_greedy_with_schedule() {
        let (status, body) = post("/vrp/greedy?schedule=true", request_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);

        let visit = &body["routes"][0]["schedule"][0];
        assert_eq!(visit["task_guid"], "t1");
        assert_eq!(visit["arrival_at_sender"], "2025-06-10T08:02:30Z");
        assert_eq!(visit["finish_time"], "2025-06-10T08:10:35Z");
    }

    #[tokio::test]
    async fn test_post_greedy_invalid_json() {
        let (status, body) = post("/vrp/greedy", String::from("{ \"couriers\": [")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid JSON: ")
        );
    }

    #[tokio::test]
    async fn test_post_greedy_missing_sender_point() {
        let mut request = request_body();
        request["tasks"][0]
            .as_object_mut()
            .unwrap()
            .remove("sender_point");

        let (status, body) = post("/vrp/greedy", request.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Task 't1' has no sender_point");
    }

    #[tokio::test]
    async fn test_post_greedy_empty_request() {
        let (status, body) = post("/vrp/greedy", String::from("{}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "routes": [], "unassigned": [] }));
    }

    #[tokio::test]
    async fn test_post_greedy_legacy_path() {
        let (status, body) = post("/vpr/greedy", request_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["routes"][0]["courier_guid"], "large");

        let (status, body) = post("/vpr/greedy", String::from("{}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "routes": [], "unassigned": [] }));
    }
}
