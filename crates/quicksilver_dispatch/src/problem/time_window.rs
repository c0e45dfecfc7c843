use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interval during which a pickup must start or a delivery must happen.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct TimeWindow {
    from: Timestamp,
    to: Timestamp,
}

impl TimeWindow {
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        TimeWindow { from, to }
    }

    pub fn from(&self) -> Timestamp {
        self.from
    }

    pub fn to(&self) -> Timestamp {
        self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEvaluation {
    /// Arrival, or the window opening when arriving early.
    pub start: Timestamp,
    pub feasible: bool,
}

pub fn evaluate_window(arrival: Timestamp, window: Option<&TimeWindow>) -> WindowEvaluation {
    match window {
        Some(window) => {
            let start = arrival.max(window.from);
            WindowEvaluation {
                start,
                feasible: start <= window.to,
            }
        }
        None => WindowEvaluation {
            start: arrival,
            feasible: true,
        },
    }
}

/// Checks the arrival at the sender against the assembly window.
pub fn pickup_feasibility(arrival: Timestamp, assembly: Option<&TimeWindow>) -> WindowEvaluation {
    evaluate_window(arrival, assembly)
}

/// Checks the arrival at the recipient against the delivery slot.
pub fn delivery_feasibility(arrival: Timestamp, slot: Option<&TimeWindow>) -> WindowEvaluation {
    evaluate_window(arrival, slot)
}
