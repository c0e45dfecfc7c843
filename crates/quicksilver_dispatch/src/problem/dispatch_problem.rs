use jiff::{SignedDuration, Timestamp};

use crate::error::ProblemError;

use super::{
    courier::{Courier, CourierIdx},
    task::{Task, TaskIdx},
};

/// Pickup and drop durations that apply to one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDurations {
    pub pickup: SignedDuration,
    pub drop: SignedDuration,
}

/// One dispatch request: the fleet, the tasks in processing order, and the instant at which
/// every courier starts moving.
#[derive(Debug, Clone)]
pub struct DispatchProblem {
    couriers: Vec<Courier>,
    tasks: Vec<Task>,
    start_time: Timestamp,
    default_pickup_duration: Option<SignedDuration>,
    default_drop_duration: Option<SignedDuration>,
}

impl DispatchProblem {
    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    pub fn courier(&self, courier_id: CourierIdx) -> &Courier {
        &self.couriers[courier_id]
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: TaskIdx) -> &Task {
        &self.tasks[task_id]
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Durations for `task`, independent of the courier being evaluated.
    ///
    /// Each falls back from the task override to the problem-wide default, then to the first
    /// courier's default, then to zero.
    pub fn service_durations(&self, task: &Task) -> ServiceDurations {
        let first_courier = self.couriers.first();

        let pickup = task
            .pickup_duration()
            .or(self.default_pickup_duration)
            .or(first_courier.map(Courier::pickup_duration))
            .unwrap_or(SignedDuration::ZERO);

        let drop = task
            .drop_duration()
            .or(self.default_drop_duration)
            .or(first_courier.map(Courier::drop_duration))
            .unwrap_or(SignedDuration::ZERO);

        ServiceDurations { pickup, drop }
    }
}

#[derive(Default)]
pub struct DispatchProblemBuilder {
    couriers: Option<Vec<Courier>>,
    tasks: Option<Vec<Task>>,
    start_time: Option<Timestamp>,
    default_pickup_duration: Option<SignedDuration>,
    default_drop_duration: Option<SignedDuration>,
}

impl DispatchProblemBuilder {
    pub fn set_couriers(&mut self, couriers: Vec<Courier>) -> &mut DispatchProblemBuilder {
        self.couriers = Some(couriers);
        self
    }

    pub fn add_courier(&mut self, courier: Courier) -> &mut DispatchProblemBuilder {
        self.couriers.get_or_insert_with(Vec::new).push(courier);
        self
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut DispatchProblemBuilder {
        self.tasks = Some(tasks);
        self
    }

    pub fn add_task(&mut self, task: Task) -> &mut DispatchProblemBuilder {
        self.tasks.get_or_insert_with(Vec::new).push(task);
        self
    }

    pub fn set_start_time(&mut self, start_time: Timestamp) -> &mut DispatchProblemBuilder {
        self.start_time = Some(start_time);
        self
    }

    pub fn set_default_pickup_duration(
        &mut self,
        duration: SignedDuration,
    ) -> &mut DispatchProblemBuilder {
        self.default_pickup_duration = Some(duration);
        self
    }

    pub fn set_default_drop_duration(
        &mut self,
        duration: SignedDuration,
    ) -> &mut DispatchProblemBuilder {
        self.default_drop_duration = Some(duration);
        self
    }

    pub fn build(self) -> Result<DispatchProblem, ProblemError> {
        Ok(DispatchProblem {
            couriers: self.couriers.unwrap_or_default(),
            tasks: self.tasks.unwrap_or_default(),
            start_time: self
                .start_time
                .ok_or(ProblemError::MissingField("start_time"))?,
            default_pickup_duration: self.default_pickup_duration,
            default_drop_duration: self.default_drop_duration,
        })
    }
}
