pub mod error;
pub mod json;
pub mod problem;
pub mod solver;
mod utils;

pub use solver::greedy::{GreedySolver, solve};

#[cfg(test)]
pub(crate) mod test_utils;
