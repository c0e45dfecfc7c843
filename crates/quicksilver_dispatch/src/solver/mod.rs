pub mod greedy;
pub mod solution;
pub mod solver_params;
pub mod trajectory;
