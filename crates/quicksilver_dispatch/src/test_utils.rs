use jiff::{SignedDuration, Timestamp};

use crate::problem::{
    capacity::Capacity,
    coordinates::Coordinates,
    courier::{Courier, CourierBuilder},
    task::{Task, TaskBuilder},
    time_window::TimeWindow,
};

pub const COURIER_START: Coordinates = Coordinates::new(55.75, 37.62);
pub const SENDER: Coordinates = Coordinates::new(55.75, 37.63);
pub const RECIPIENT: Coordinates = Coordinates::new(55.76, 37.64);

pub fn start_time() -> Timestamp {
    "2025-06-10T08:00:00Z".parse().unwrap()
}

/// Instant `seconds` after [`start_time`].
pub fn at(seconds: i64) -> Timestamp {
    start_time() + SignedDuration::from_secs(seconds)
}

pub fn window(from_secs: i64, to_secs: i64) -> TimeWindow {
    TimeWindow::new(at(from_secs), at(to_secs))
}

pub fn create_courier(id: &str, capacity: Option<Capacity>) -> Courier {
    let mut builder = CourierBuilder::default();
    builder
        .set_external_id(String::from(id))
        .set_start_point(COURIER_START)
        .set_pickup_duration(SignedDuration::from_secs(120))
        .set_drop_duration(SignedDuration::from_secs(60));

    if let Some(capacity) = capacity {
        builder.set_capacity(capacity);
    }

    builder.build().unwrap()
}

pub fn create_task(id: &str, capacity: Option<Capacity>) -> TaskBuilder {
    let mut builder = TaskBuilder::default();
    builder
        .set_external_id(String::from(id))
        .set_sender_point(SENDER)
        .set_recipient_point(RECIPIENT);

    if let Some(capacity) = capacity {
        builder.set_capacity(capacity);
    }

    builder
}

pub fn build_task(id: &str, capacity: Option<Capacity>) -> Task {
    create_task(id, capacity).build().unwrap()
}
