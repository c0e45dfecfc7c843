use serde::Serialize;

use crate::problem::{courier::CourierIdx, task::TaskIdx};

use super::trajectory::{CourierTrajectory, Visit};

/// Tasks assigned to one courier, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourierRoute {
    courier_id: CourierIdx,
    visits: Vec<Visit>,
}

impl CourierRoute {
    pub(crate) fn new(courier_id: CourierIdx, visits: Vec<Visit>) -> Self {
        CourierRoute { courier_id, visits }
    }

    pub fn courier_id(&self) -> CourierIdx {
        self.courier_id
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn task_ids(&self) -> impl Iterator<Item = TaskIdx> + '_ {
        self.visits.iter().map(Visit::task_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Solution {
    routes: Vec<CourierRoute>,
    unassigned: Vec<TaskIdx>,
}

impl Solution {
    /// Keeps only the couriers that received at least one task, in courier order.
    pub(crate) fn from_trajectories(
        trajectories: Vec<CourierTrajectory>,
        unassigned: Vec<TaskIdx>,
    ) -> Self {
        Solution {
            routes: trajectories
                .into_iter()
                .filter_map(CourierTrajectory::into_route)
                .collect(),
            unassigned,
        }
    }

    pub fn routes(&self) -> &[CourierRoute] {
        &self.routes
    }

    pub fn unassigned(&self) -> &[TaskIdx] {
        &self.unassigned
    }

    pub fn route(&self, courier_id: CourierIdx) -> Option<&CourierRoute> {
        self.routes
            .iter()
            .find(|route| route.courier_id == courier_id)
    }

    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(|route| route.visits.len()).sum()
    }
}
