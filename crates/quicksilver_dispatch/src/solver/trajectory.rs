use std::fmt;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::problem::{
    capacity::Capacity,
    coordinates::{Coordinates, geodistance, travel_time},
    courier::{Courier, CourierIdx},
    dispatch_problem::ServiceDurations,
    speed::MetersPerSecond,
    task::{Task, TaskIdx},
    time_window::{delivery_feasibility, pickup_feasibility},
};

use super::solution::CourierRoute;

/// Schedule of one task served by a courier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visit {
    task_id: TaskIdx,
    arrival_at_sender: Timestamp,
    pickup_start: Timestamp,
    departure_from_sender: Timestamp,
    arrival_at_recipient: Timestamp,
    delivery_time: Timestamp,
    finish_time: Timestamp,
}

impl Visit {
    pub fn task_id(&self) -> TaskIdx {
        self.task_id
    }

    pub fn arrival_at_sender(&self) -> Timestamp {
        self.arrival_at_sender
    }

    pub fn pickup_start(&self) -> Timestamp {
        self.pickup_start
    }

    pub fn departure_from_sender(&self) -> Timestamp {
        self.departure_from_sender
    }

    pub fn arrival_at_recipient(&self) -> Timestamp {
        self.arrival_at_recipient
    }

    pub fn delivery_time(&self) -> Timestamp {
        self.delivery_time
    }

    pub fn finish_time(&self) -> Timestamp {
        self.finish_time
    }

    /// Time spent waiting for the assembly window and the delivery slot to open.
    pub fn waiting_duration(&self) -> SignedDuration {
        self.pickup_start.duration_since(self.arrival_at_sender)
            + self.delivery_time.duration_since(self.arrival_at_recipient)
    }
}

/// Why a courier could not take a task at its current point in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Capacity,
    AssemblyWindow,
    DeliverySlot,
    ClockOverflow,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::Capacity => "capacity exceeded",
            Rejection::AssemblyWindow => "assembly window missed",
            Rejection::DeliverySlot => "delivery slot missed",
            Rejection::ClockOverflow => "schedule out of time range",
        };
        f.write_str(reason)
    }
}

/// Simulated state of one courier while tasks are handed out.
///
/// Only [`CourierTrajectory::commit`] mutates it, once per accepted task.
#[derive(Debug, Clone)]
pub struct CourierTrajectory {
    courier_id: CourierIdx,
    location: Option<Coordinates>,
    current_time: Timestamp,
    used_capacity: Capacity,
    visits: Vec<Visit>,
}

impl CourierTrajectory {
    pub fn new(courier_id: CourierIdx, courier: &Courier, start_time: Timestamp) -> Self {
        CourierTrajectory {
            courier_id,
            location: courier.start_point().copied(),
            current_time: start_time,
            used_capacity: Capacity::ZERO,
            visits: Vec::new(),
        }
    }

    pub fn courier_id(&self) -> CourierIdx {
        self.courier_id
    }

    pub fn location(&self) -> Option<&Coordinates> {
        self.location.as_ref()
    }

    pub fn current_time(&self) -> Timestamp {
        self.current_time
    }

    pub fn used_capacity(&self) -> &Capacity {
        &self.used_capacity
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Schedules `task` after the last committed one without touching the trajectory.
    pub fn plan_visit(
        &self,
        task_id: TaskIdx,
        task: &Task,
        durations: ServiceDurations,
        speed: MetersPerSecond,
    ) -> Result<Visit, Rejection> {
        let to_sender = travel_time(geodistance(self.location(), task.sender_point()), speed);
        let arrival_at_sender = self
            .current_time
            .checked_add(to_sender)
            .map_err(|_| Rejection::ClockOverflow)?;

        let pickup = pickup_feasibility(arrival_at_sender, task.assembly());
        if !pickup.feasible {
            return Err(Rejection::AssemblyWindow);
        }

        let departure_from_sender = pickup
            .start
            .checked_add(durations.pickup)
            .map_err(|_| Rejection::ClockOverflow)?;

        let to_recipient = travel_time(
            geodistance(task.sender_point(), task.recipient_point()),
            speed,
        );
        let arrival_at_recipient = departure_from_sender
            .checked_add(to_recipient)
            .map_err(|_| Rejection::ClockOverflow)?;

        let delivery = delivery_feasibility(arrival_at_recipient, task.slot());
        if !delivery.feasible {
            return Err(Rejection::DeliverySlot);
        }

        let finish_time = delivery
            .start
            .checked_add(durations.drop)
            .map_err(|_| Rejection::ClockOverflow)?;

        Ok(Visit {
            task_id,
            arrival_at_sender,
            pickup_start: pickup.start,
            departure_from_sender,
            arrival_at_recipient,
            delivery_time: delivery.start,
            finish_time,
        })
    }

    /// Moves the courier to the recipient of `task` once the visit has been accepted.
    pub fn commit(&mut self, task: &Task, visit: Visit, used_capacity: Capacity) {
        self.location = task.recipient_point().copied();
        self.current_time = visit.finish_time;
        self.used_capacity = used_capacity;
        self.visits.push(visit);
    }

    pub fn into_route(self) -> Option<CourierRoute> {
        if self.visits.is_empty() {
            None
        } else {
            Some(CourierRoute::new(self.courier_id, self.visits))
        }
    }
}
