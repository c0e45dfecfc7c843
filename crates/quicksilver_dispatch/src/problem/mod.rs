pub mod capacity;
pub mod coordinates;
pub mod courier;
pub mod dispatch_problem;
pub mod meters;
pub mod speed;
pub mod task;
pub mod time_window;
