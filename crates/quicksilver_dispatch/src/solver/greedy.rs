use tracing::{Level, debug, instrument, trace};

use crate::{
    problem::{
        capacity::{Capacity, add_capacities, can_fit},
        courier::Courier,
        dispatch_problem::{DispatchProblem, ServiceDurations},
        task::{Task, TaskIdx},
    },
    timer_debug,
    utils::enumerate_idx::EnumerateIdx,
};

use super::{
    solution::Solution,
    solver_params::SolverParams,
    trajectory::{CourierTrajectory, Rejection, Visit},
};

/// First-fit assignment of tasks to couriers.
///
/// Tasks are taken in input order and each one goes to the first courier, in input order,
/// that can still carry it and reach both ends within their windows. Assignments are never
/// revisited, so the outcome depends on the order of both lists.
#[derive(Clone, Debug, Default)]
pub struct GreedySolver {
    params: SolverParams,
}

impl GreedySolver {
    pub fn new(params: SolverParams) -> Self {
        GreedySolver { params }
    }

    #[instrument(
        skip_all,
        level = Level::DEBUG,
        fields(couriers = problem.couriers().len(), tasks = problem.tasks().len())
    )]
    pub fn solve(&self, problem: &DispatchProblem) -> Solution {
        timer_debug!("Greedy assignment", self.assign_tasks(problem))
    }

    fn assign_tasks(&self, problem: &DispatchProblem) -> Solution {
        let mut trajectories: Vec<CourierTrajectory> = problem
            .couriers()
            .iter()
            .enumerate_idx()
            .map(|(courier_id, courier)| {
                CourierTrajectory::new(courier_id, courier, problem.start_time())
            })
            .collect();

        let mut unassigned: Vec<TaskIdx> = vec![];

        for (task_id, task) in problem.tasks().iter().enumerate_idx() {
            let durations = problem.service_durations(task);

            let accepted = trajectories.iter_mut().find_map(|trajectory| {
                let courier = problem.courier(trajectory.courier_id());
                match self.evaluate(trajectory, courier, task_id, task, durations) {
                    Ok((visit, load)) => Some((trajectory, visit, load)),
                    Err(rejection) => {
                        trace!(
                            task = task.external_id(),
                            courier = courier.external_id(),
                            %rejection,
                            "Courier rejected"
                        );
                        None
                    }
                }
            });

            match accepted {
                Some((trajectory, visit, load)) => {
                    debug!(
                        task = task.external_id(),
                        courier = problem.courier(trajectory.courier_id()).external_id(),
                        finish_time = %visit.finish_time(),
                        "Task assigned"
                    );
                    trajectory.commit(task, visit, load);
                }
                None => {
                    debug!(task = task.external_id(), "Task unassigned");
                    unassigned.push(task_id);
                }
            }
        }

        Solution::from_trajectories(trajectories, unassigned)
    }

    /// Checks capacity, then both windows, for `task` appended to `trajectory`.
    fn evaluate(
        &self,
        trajectory: &CourierTrajectory,
        courier: &Courier,
        task_id: TaskIdx,
        task: &Task,
        durations: ServiceDurations,
    ) -> Result<(Visit, Capacity), Rejection> {
        let load = add_capacities(Some(trajectory.used_capacity()), task.capacity())
            .unwrap_or(Capacity::ZERO);

        // Couriers without a declared limit take any load.
        if courier.capacity().is_some() && !can_fit(courier.capacity(), Some(&load)) {
            return Err(Rejection::Capacity);
        }

        let visit = trajectory.plan_visit(task_id, task, durations, self.params.average_speed)?;

        Ok((visit, load))
    }
}

/// Solves `problem` with the default average speed.
pub fn solve(problem: &DispatchProblem) -> Solution {
    GreedySolver::default().solve(problem)
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::{
            courier::CourierIdx, dispatch_problem::DispatchProblemBuilder, speed::MetersPerSecond,
        },
        test_utils::{self, start_time},
    };

    use super::*;

    fn problem(couriers: Vec<Courier>, tasks: Vec<Task>) -> DispatchProblem {
        let mut builder = DispatchProblemBuilder::default();
        builder
            .set_start_time(start_time())
            .set_couriers(couriers)
            .set_tasks(tasks);
        builder.build().unwrap()
    }

    #[test]
    fn test_capacity_accumulates_across_tasks() {
        let problem = problem(
            vec![
                test_utils::create_courier("c1", Some(Capacity::new(5.0, 5.0))),
                test_utils::create_courier("c2", Some(Capacity::new(5.0, 5.0))),
            ],
            vec![
                test_utils::build_task("t1", Some(Capacity::new(3.0, 3.0))),
                test_utils::build_task("t2", Some(Capacity::new(2.0, 2.0))),
                test_utils::build_task("t3", Some(Capacity::new(1.0, 1.0))),
            ],
        );

        let solution = solve(&problem);

        let first: Vec<_> = solution.routes()[0].task_ids().map(|t| t.get()).collect();
        let second: Vec<_> = solution.routes()[1].task_ids().map(|t| t.get()).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2]);
        assert!(solution.unassigned().is_empty());
    }

    #[test]
    fn test_courier_without_capacity_takes_any_load() {
        let problem = problem(
            vec![test_utils::create_courier("c1", None)],
            vec![test_utils::build_task("t1", Some(Capacity::new(100.0, 100.0)))],
        );

        let solution = solve(&problem);

        assert_eq!(solution.assigned_count(), 1);
        assert!(solution.route(CourierIdx::new(0)).is_some());
    }

    #[test]
    fn test_time_rejection_leaves_state_untouched() {
        let mut late = test_utils::create_task("late", None);
        late.set_assembly(test_utils::window(0, 10));

        let problem = problem(
            vec![test_utils::create_courier("c1", None)],
            vec![late.build().unwrap(), test_utils::build_task("t2", None)],
        );

        let solution = solve(&problem);
        let route = solution.route(CourierIdx::new(0)).unwrap();

        assert_eq!(solution.unassigned(), &[TaskIdx::new(0)]);
        assert_eq!(route.visits()[0].arrival_at_sender(), test_utils::at(150));
    }

    #[test]
    fn test_speed_parameter_changes_travel_times() {
        let problem = problem(
            vec![test_utils::create_courier("c1", None)],
            vec![test_utils::build_task("t1", None)],
        );

        let solver = GreedySolver::new(SolverParams {
            average_speed: MetersPerSecond::new(1.0),
        });
        let solution = solver.solve(&problem);
        let visit = solution.routes()[0].visits()[0];

        assert_eq!(visit.arrival_at_sender(), test_utils::at(625));
    }

    #[test]
    fn test_no_couriers() {
        let problem = problem(vec![], vec![test_utils::build_task("t1", None)]);

        let solution = solve(&problem);

        assert!(solution.routes().is_empty());
        assert_eq!(solution.unassigned(), &[TaskIdx::new(0)]);
    }
}
