use std::ops::Add;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Cargo volume and weight.
///
/// Used both for a courier's limit and for the load accumulated along its trajectory.
/// A missing or `null` component reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct Capacity {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub volume: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub weight: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Capacity {
    pub const ZERO: Capacity = Capacity {
        volume: 0.0,
        weight: 0.0,
    };

    pub const fn new(volume: f64, weight: f64) -> Self {
        Capacity { volume, weight }
    }

    pub fn is_zero(&self) -> bool {
        self.volume == 0.0 && self.weight == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.volume < 0.0 || self.weight < 0.0
    }

    pub fn fits(&self, demand: &Capacity) -> bool {
        self.volume >= demand.volume && self.weight >= demand.weight
    }
}

impl Add for Capacity {
    type Output = Capacity;

    fn add(self, other: Capacity) -> Capacity {
        Capacity {
            volume: self.volume + other.volume,
            weight: self.weight + other.weight,
        }
    }
}

/// Component-wise sum where an absent side contributes nothing.
pub fn add_capacities(a: Option<&Capacity>, b: Option<&Capacity>) -> Option<Capacity> {
    match (a, b) {
        (Some(a), Some(b)) => Some(*a + *b),
        (Some(a), None) => Some(*a),
        (None, Some(b)) => Some(*b),
        (None, None) => None,
    }
}

/// Checks `demand` against `container`.
///
/// An absent demand always fits. An absent container behaves as a zero capacity, not an
/// unlimited one: only a zero demand fits into it.
pub fn can_fit(container: Option<&Capacity>, demand: Option<&Capacity>) -> bool {
    match (container, demand) {
        (_, None) => true,
        (None, Some(demand)) => demand.is_zero(),
        (Some(container), Some(demand)) => container.fits(demand),
    }
}
