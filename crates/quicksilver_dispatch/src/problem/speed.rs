/// Average courier speed, roughly 15 km/h.
pub const AVERAGE_SPEED: MetersPerSecond = MetersPerSecond(4.17);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MetersPerSecond(f64);

impl MetersPerSecond {
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MetersPerSecond {
    fn default() -> Self {
        AVERAGE_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_average_speed() {
        assert_eq!(MetersPerSecond::default().value(), 4.17);
    }
}
