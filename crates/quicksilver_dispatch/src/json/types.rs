use fxhash::FxHashSet;
use jiff::{SignedDuration, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{
    error::ProblemError,
    problem::{
        capacity::Capacity,
        coordinates::Coordinates,
        courier::{Courier, CourierBuilder},
        dispatch_problem::{DispatchProblem, DispatchProblemBuilder},
        task::{Task, TaskBuilder},
        time_window::TimeWindow,
    },
    solver::{greedy::GreedySolver, solution::Solution, trajectory::Visit},
};

pub trait FromProblem<T> {
    fn from_problem(value: T, problem: &DispatchProblem) -> Self;
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(rename = "DispatchRequest")]
pub struct JsonDispatchRequest {
    #[serde(default)]
    pub couriers: Vec<JsonCourier>,
    #[serde(default)]
    pub tasks: Vec<JsonTask>,

    /// Instant at which every courier starts moving. Defaults to the time the request
    /// was received.
    #[serde(default)]
    pub start_time: Option<Timestamp>,

    /// Pickup duration in seconds for tasks without their own. Defaults to the first
    /// courier's `pickup_duration`.
    #[serde(default)]
    pub default_pickup_duration: Option<i64>,

    /// Drop duration in seconds for tasks without their own. Defaults to the first
    /// courier's `drop_duration`.
    #[serde(default)]
    pub default_drop_duration: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(rename = "Courier")]
pub struct JsonCourier {
    pub guid: String,
    pub start_point: Option<Coordinates>,
    pub finish_point: Option<Coordinates>,
    pub priority: Option<i64>,
    pub capacity: Option<Capacity>,

    /// Seconds. Missing or `null` reads as zero.
    #[serde(default)]
    pub pickup_duration: Option<i64>,

    /// Seconds. Missing or `null` reads as zero.
    #[serde(default)]
    pub drop_duration: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(rename = "Task")]
pub struct JsonTask {
    pub guid: String,
    pub sender_point: Option<Coordinates>,
    pub recipient_point: Option<Coordinates>,
    pub capacity: Option<Capacity>,

    /// When the cargo can be picked up.
    pub assembly: Option<TimeWindow>,

    /// When the cargo must be delivered.
    pub slot: Option<TimeWindow>,

    /// Seconds.
    pub pickup_duration: Option<i64>,

    /// Seconds.
    pub drop_duration: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename = "DispatchResponse")]
pub struct JsonDispatchResponse {
    pub routes: Vec<JsonRoute>,
    pub unassigned: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename = "Route")]
pub struct JsonRoute {
    pub courier_guid: String,
    pub route: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<JsonVisit>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename = "Visit")]
pub struct JsonVisit {
    pub task_guid: String,
    pub arrival_at_sender: Timestamp,
    pub pickup_start: Timestamp,
    pub departure_from_sender: Timestamp,
    pub arrival_at_recipient: Timestamp,
    pub delivery_time: Timestamp,
    pub finish_time: Timestamp,

    /// Seconds spent waiting for windows to open.
    pub waiting_duration: i64,
}

impl FromProblem<&Visit> for JsonVisit {
    fn from_problem(value: &Visit, problem: &DispatchProblem) -> Self {
        JsonVisit {
            task_guid: problem.task(value.task_id()).external_id().to_owned(),
            arrival_at_sender: value.arrival_at_sender(),
            pickup_start: value.pickup_start(),
            departure_from_sender: value.departure_from_sender(),
            arrival_at_recipient: value.arrival_at_recipient(),
            delivery_time: value.delivery_time(),
            finish_time: value.finish_time(),
            waiting_duration: value.waiting_duration().as_secs(),
        }
    }
}

impl JsonDispatchResponse {
    pub fn from_solution(
        solution: &Solution,
        problem: &DispatchProblem,
        with_schedule: bool,
    ) -> Self {
        let routes = solution
            .routes()
            .iter()
            .map(|route| JsonRoute {
                courier_guid: problem.courier(route.courier_id()).external_id().to_owned(),
                route: route
                    .task_ids()
                    .map(|task_id| problem.task(task_id).external_id().to_owned())
                    .collect(),
                schedule: with_schedule.then(|| {
                    route
                        .visits()
                        .iter()
                        .map(|visit| JsonVisit::from_problem(visit, problem))
                        .collect()
                }),
            })
            .collect();

        JsonDispatchResponse {
            routes,
            unassigned: solution
                .unassigned()
                .iter()
                .map(|&task_id| problem.task(task_id).external_id().to_owned())
                .collect(),
        }
    }
}

fn validate_point(id: &str, point: Coordinates) -> Result<Coordinates, ProblemError> {
    if point.is_valid() {
        Ok(point)
    } else {
        Err(ProblemError::InvalidCoordinates {
            id: id.to_owned(),
            lat: point.lat,
            lon: point.lon,
        })
    }
}

fn validate_capacity(id: &str, capacity: Capacity) -> Result<Capacity, ProblemError> {
    if capacity.is_negative() {
        Err(ProblemError::NegativeCapacity { id: id.to_owned() })
    } else {
        Ok(capacity)
    }
}

fn seconds_to_duration(
    id: &str,
    field: &'static str,
    seconds: i64,
) -> Result<SignedDuration, ProblemError> {
    if seconds < 0 {
        Err(ProblemError::NegativeDuration {
            id: id.to_owned(),
            field,
            seconds,
        })
    } else {
        Ok(SignedDuration::from_secs(seconds))
    }
}

impl TryFrom<JsonCourier> for Courier {
    type Error = ProblemError;

    fn try_from(value: JsonCourier) -> Result<Self, Self::Error> {
        let mut builder = CourierBuilder::default();

        let start_point = value
            .start_point
            .ok_or_else(|| ProblemError::MissingStartPoint {
                courier: value.guid.clone(),
            })?;
        builder.set_start_point(validate_point(&value.guid, start_point)?);

        if let Some(finish_point) = value.finish_point {
            builder.set_finish_point(validate_point(&value.guid, finish_point)?);
        }

        if let Some(priority) = value.priority {
            builder.set_priority(priority);
        }

        if let Some(capacity) = value.capacity {
            builder.set_capacity(validate_capacity(&value.guid, capacity)?);
        }

        builder.set_pickup_duration(seconds_to_duration(
            &value.guid,
            "pickup_duration",
            value.pickup_duration.unwrap_or_default(),
        )?);
        builder.set_drop_duration(seconds_to_duration(
            &value.guid,
            "drop_duration",
            value.drop_duration.unwrap_or_default(),
        )?);

        builder.set_external_id(value.guid);
        builder.build()
    }
}

impl TryFrom<JsonTask> for Task {
    type Error = ProblemError;

    fn try_from(value: JsonTask) -> Result<Self, Self::Error> {
        let mut builder = TaskBuilder::default();

        let sender_point = value
            .sender_point
            .ok_or_else(|| ProblemError::MissingTaskPoint {
                task: value.guid.clone(),
                field: "sender_point",
            })?;
        let recipient_point =
            value
                .recipient_point
                .ok_or_else(|| ProblemError::MissingTaskPoint {
                    task: value.guid.clone(),
                    field: "recipient_point",
                })?;

        builder
            .set_sender_point(validate_point(&value.guid, sender_point)?)
            .set_recipient_point(validate_point(&value.guid, recipient_point)?);

        if let Some(capacity) = value.capacity {
            builder.set_capacity(validate_capacity(&value.guid, capacity)?);
        }

        if let Some(assembly) = value.assembly {
            builder.set_assembly(assembly);
        }

        if let Some(slot) = value.slot {
            builder.set_slot(slot);
        }

        if let Some(seconds) = value.pickup_duration {
            builder.set_pickup_duration(seconds_to_duration(
                &value.guid,
                "pickup_duration",
                seconds,
            )?);
        }

        if let Some(seconds) = value.drop_duration {
            builder.set_drop_duration(seconds_to_duration(&value.guid, "drop_duration", seconds)?);
        }

        builder.set_external_id(value.guid);
        builder.build()
    }
}

impl JsonDispatchRequest {
    /// Validates the request and anchors its clock, using `received_at` when no
    /// `start_time` was given.
    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self, received_at: Timestamp) -> Result<DispatchProblem, ProblemError> {
        let mut builder = DispatchProblemBuilder::default();

        builder.set_start_time(self.start_time.unwrap_or(received_at));

        if let Some(seconds) = self.default_pickup_duration {
            builder.set_default_pickup_duration(seconds_to_duration(
                "request",
                "default_pickup_duration",
                seconds,
            )?);
        }

        if let Some(seconds) = self.default_drop_duration {
            builder.set_default_drop_duration(seconds_to_duration(
                "request",
                "default_drop_duration",
                seconds,
            )?);
        }

        let couriers = self
            .couriers
            .into_iter()
            .map(Courier::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let tasks = self
            .tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = FxHashSet::default();
        for task in &tasks {
            if !seen.insert(task.external_id()) {
                warn!(task = task.external_id(), "Duplicate task guid");
            }
        }

        builder.set_couriers(couriers).set_tasks(tasks);
        builder.build()
    }

    /// Builds the problem, assigns every task and renders the response.
    pub fn solve(
        self,
        received_at: Timestamp,
        solver: &GreedySolver,
        with_schedule: bool,
    ) -> Result<JsonDispatchResponse, ProblemError> {
        let problem = self.build_problem(received_at)?;
        let solution = solver.solve(&problem);

        Ok(JsonDispatchResponse::from_solution(
            &solution,
            &problem,
            with_schedule,
        ))
    }
}
