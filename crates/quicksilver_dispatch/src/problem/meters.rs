use std::ops::{Add, Div};

use jiff::SignedDuration;

use crate::problem::speed::MetersPerSecond;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters(self.0 + other.0)
    }
}

/// Travel time at a constant speed, truncated to whole seconds.
impl Div<MetersPerSecond> for Meters {
    type Output = SignedDuration;

    fn div(self, speed: MetersPerSecond) -> SignedDuration {
        let seconds = self.0 / speed.value();
        SignedDuration::from_secs(seconds.trunc() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time_truncates_to_seconds() {
        let duration = Meters::new(100.0) / MetersPerSecond::new(3.0);
        assert_eq!(duration, SignedDuration::from_secs(33));
    }

    #[test]
    fn test_travel_time_zero_distance() {
        assert_eq!(Meters::ZERO / MetersPerSecond::new(4.17), SignedDuration::ZERO);
    }

    #[test]
    fn test_add() {
        assert_eq!(Meters::new(1.5) + Meters::new(2.5), Meters::new(4.0));
    }
}
