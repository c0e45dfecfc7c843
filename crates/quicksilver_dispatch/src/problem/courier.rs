use jiff::SignedDuration;
use serde::Serialize;

use crate::{define_index_newtype, error::ProblemError};

use super::{capacity::Capacity, coordinates::Coordinates};

define_index_newtype!(CourierIdx, Courier);

#[derive(Serialize, Debug, Clone)]
pub struct Courier {
    external_id: String,
    start_point: Option<Coordinates>,
    finish_point: Option<Coordinates>,
    priority: Option<i64>,
    capacity: Option<Capacity>,
    pickup_duration: SignedDuration,
    drop_duration: SignedDuration,
}

impl Courier {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn start_point(&self) -> Option<&Coordinates> {
        self.start_point.as_ref()
    }

    /// Not used when assigning tasks.
    pub fn finish_point(&self) -> Option<&Coordinates> {
        self.finish_point.as_ref()
    }

    pub fn priority(&self) -> Option<i64> {
        self.priority
    }

    /// `None` means the courier declared no limit.
    pub fn capacity(&self) -> Option<&Capacity> {
        self.capacity.as_ref()
    }

    pub fn pickup_duration(&self) -> SignedDuration {
        self.pickup_duration
    }

    pub fn drop_duration(&self) -> SignedDuration {
        self.drop_duration
    }
}

#[derive(Default)]
pub struct CourierBuilder {
    external_id: Option<String>,
    start_point: Option<Coordinates>,
    finish_point: Option<Coordinates>,
    priority: Option<i64>,
    capacity: Option<Capacity>,
    pickup_duration: Option<SignedDuration>,
    drop_duration: Option<SignedDuration>,
}

impl CourierBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut CourierBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_start_point(&mut self, start_point: Coordinates) -> &mut CourierBuilder {
        self.start_point = Some(start_point);
        self
    }

    pub fn set_finish_point(&mut self, finish_point: Coordinates) -> &mut CourierBuilder {
        self.finish_point = Some(finish_point);
        self
    }

    pub fn set_priority(&mut self, priority: i64) -> &mut CourierBuilder {
        self.priority = Some(priority);
        self
    }

    pub fn set_capacity(&mut self, capacity: Capacity) -> &mut CourierBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_pickup_duration(&mut self, duration: SignedDuration) -> &mut CourierBuilder {
        self.pickup_duration = Some(duration);
        self
    }

    pub fn set_drop_duration(&mut self, duration: SignedDuration) -> &mut CourierBuilder {
        self.drop_duration = Some(duration);
        self
    }

    pub fn build(self) -> Result<Courier, ProblemError> {
        Ok(Courier {
            external_id: self
                .external_id
                .ok_or(ProblemError::MissingField("courier guid"))?,
            start_point: self.start_point,
            finish_point: self.finish_point,
            priority: self.priority,
            capacity: self.capacity,
            pickup_duration: self.pickup_duration.unwrap_or(SignedDuration::ZERO),
            drop_duration: self.drop_duration.unwrap_or(SignedDuration::ZERO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = CourierBuilder::default();
        builder
            .set_external_id(String::from("c1"))
            .set_start_point(Coordinates::new(55.75, 37.62))
            .set_pickup_duration(SignedDuration::from_secs(120));

        let courier = builder.build().unwrap();

        assert_eq!(courier.external_id(), "c1");
        assert_eq!(courier.start_point(), Some(&Coordinates::new(55.75, 37.62)));
        assert_eq!(courier.capacity(), None);
        assert_eq!(courier.pickup_duration(), SignedDuration::from_secs(120));
        assert_eq!(courier.drop_duration(), SignedDuration::ZERO);
    }

    #[test]
    fn test_builder_requires_id() {
        let result = CourierBuilder::default().build();
        assert_eq!(
            result.unwrap_err(),
            ProblemError::MissingField("courier guid")
        );
    }
}
