use jiff::{SignedDuration, Timestamp};
use quicksilver_dispatch::{
    json::types::{JsonDispatchRequest, JsonDispatchResponse},
    problem::{
        capacity::Capacity,
        coordinates::Coordinates,
        courier::{Courier, CourierBuilder},
        dispatch_problem::{DispatchProblem, DispatchProblemBuilder},
        task::{Task, TaskBuilder},
        time_window::TimeWindow,
    },
};

pub const NOW: &str = "2025-06-10T08:00:00Z";

pub fn now() -> Timestamp {
    NOW.parse().unwrap()
}

pub fn after(seconds: i64) -> Timestamp {
    now() + SignedDuration::from_secs(seconds)
}

pub fn window(from_secs: i64, to_secs: i64) -> TimeWindow {
    TimeWindow::new(after(from_secs), after(to_secs))
}

pub fn create_courier(id: &str, start: Coordinates, capacity: Option<Capacity>) -> Courier {
    let mut builder = CourierBuilder::default();
    builder
        .set_external_id(id.to_owned())
        .set_start_point(start)
        .set_pickup_duration(SignedDuration::from_secs(120))
        .set_drop_duration(SignedDuration::from_secs(60));

    if let Some(capacity) = capacity {
        builder.set_capacity(capacity);
    }

    builder.build().unwrap()
}

pub fn create_task(
    id: &str,
    sender: Coordinates,
    recipient: Coordinates,
    capacity: Option<Capacity>,
) -> TaskBuilder {
    let mut builder = TaskBuilder::default();
    builder
        .set_external_id(id.to_owned())
        .set_sender_point(sender)
        .set_recipient_point(recipient);

    if let Some(capacity) = capacity {
        builder.set_capacity(capacity);
    }

    builder
}

pub fn create_test_problem(couriers: Vec<Courier>, tasks: Vec<Task>) -> DispatchProblem {
    let mut builder = DispatchProblemBuilder::default();
    builder
        .set_start_time(now())
        .set_couriers(couriers)
        .set_tasks(tasks);
    builder.build().unwrap()
}

pub fn load_fixture(name: &str) -> JsonDispatchRequest {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn route_of<'a>(response: &'a JsonDispatchResponse, courier_guid: &str) -> Option<&'a [String]> {
    response
        .routes
        .iter()
        .find(|route| route.courier_guid == courier_guid)
        .map(|route| route.route.as_slice())
}
