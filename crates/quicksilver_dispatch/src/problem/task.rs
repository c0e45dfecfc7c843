use jiff::SignedDuration;
use serde::Serialize;

use crate::{define_index_newtype, error::ProblemError};

use super::{capacity::Capacity, coordinates::Coordinates, time_window::TimeWindow};

define_index_newtype!(TaskIdx, Task);

/// A single delivery: carry `capacity` from the sender to the recipient.
#[derive(Serialize, Debug, Clone)]
pub struct Task {
    external_id: String,
    sender_point: Option<Coordinates>,
    recipient_point: Option<Coordinates>,
    capacity: Option<Capacity>,
    assembly: Option<TimeWindow>,
    slot: Option<TimeWindow>,
    pickup_duration: Option<SignedDuration>,
    drop_duration: Option<SignedDuration>,
}

impl Task {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn sender_point(&self) -> Option<&Coordinates> {
        self.sender_point.as_ref()
    }

    pub fn recipient_point(&self) -> Option<&Coordinates> {
        self.recipient_point.as_ref()
    }

    pub fn capacity(&self) -> Option<&Capacity> {
        self.capacity.as_ref()
    }

    pub fn assembly(&self) -> Option<&TimeWindow> {
        self.assembly.as_ref()
    }

    pub fn slot(&self) -> Option<&TimeWindow> {
        self.slot.as_ref()
    }

    pub fn pickup_duration(&self) -> Option<SignedDuration> {
        self.pickup_duration
    }

    pub fn drop_duration(&self) -> Option<SignedDuration> {
        self.drop_duration
    }
}

#[derive(Default)]
pub struct TaskBuilder {
    external_id: Option<String>,
    sender_point: Option<Coordinates>,
    recipient_point: Option<Coordinates>,
    capacity: Option<Capacity>,
    assembly: Option<TimeWindow>,
    slot: Option<TimeWindow>,
    pickup_duration: Option<SignedDuration>,
    drop_duration: Option<SignedDuration>,
}

impl TaskBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut TaskBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_sender_point(&mut self, sender_point: Coordinates) -> &mut TaskBuilder {
        self.sender_point = Some(sender_point);
        self
    }

    pub fn set_recipient_point(&mut self, recipient_point: Coordinates) -> &mut TaskBuilder {
        self.recipient_point = Some(recipient_point);
        self
    }

    pub fn set_capacity(&mut self, capacity: Capacity) -> &mut TaskBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_assembly(&mut self, assembly: TimeWindow) -> &mut TaskBuilder {
        self.assembly = Some(assembly);
        self
    }

    pub fn set_slot(&mut self, slot: TimeWindow) -> &mut TaskBuilder {
        self.slot = Some(slot);
        self
    }

    pub fn set_pickup_duration(&mut self, duration: SignedDuration) -> &mut TaskBuilder {
        self.pickup_duration = Some(duration);
        self
    }

    pub fn set_drop_duration(&mut self, duration: SignedDuration) -> &mut TaskBuilder {
        self.drop_duration = Some(duration);
        self
    }

    pub fn build(self) -> Result<Task, ProblemError> {
        Ok(Task {
            external_id: self
                .external_id
                .ok_or(ProblemError::MissingField("task guid"))?,
            sender_point: self.sender_point,
            recipient_point: self.recipient_point,
            capacity: self.capacity,
            assembly: self.assembly,
            slot: self.slot,
            pickup_duration: self.pickup_duration,
            drop_duration: self.drop_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = TaskBuilder::default();
        builder
            .set_external_id(String::from("t1"))
            .set_sender_point(Coordinates::new(55.75, 37.63))
            .set_recipient_point(Coordinates::new(55.76, 37.64))
            .set_capacity(Capacity::new(2.0, 3.0))
            .set_drop_duration(SignedDuration::from_secs(30));

        let task = builder.build().unwrap();

        assert_eq!(task.external_id(), "t1");
        assert_eq!(task.capacity(), Some(&Capacity::new(2.0, 3.0)));
        assert_eq!(task.assembly(), None);
        assert_eq!(task.pickup_duration(), None);
        assert_eq!(task.drop_duration(), Some(SignedDuration::from_secs(30)));
    }
}
