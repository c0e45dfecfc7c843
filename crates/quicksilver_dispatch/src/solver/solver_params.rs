use crate::problem::speed::{AVERAGE_SPEED, MetersPerSecond};

#[derive(Clone, Debug)]
pub struct SolverParams {
    /// Constant speed used to turn distances into travel times.
    pub average_speed: MetersPerSecond,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            average_speed: AVERAGE_SPEED,
        }
    }
}
