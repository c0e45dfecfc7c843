use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{meters::Meters, speed::MetersPerSecond};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coordinates { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to `other`.
    pub fn distance_to(&self, other: &Coordinates) -> Meters {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = lat2_rad - lat1_rad;
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Meters::new(EARTH_RADIUS_METERS * c)
    }
}

/// Distance between two optional points.
///
/// Falls back to zero when either point is missing. That zero says nothing about the points
/// being co-located, so callers should only feed complete input through here.
pub fn geodistance(from: Option<&Coordinates>, to: Option<&Coordinates>) -> Meters {
    match (from, to) {
        (Some(from), Some(to)) => from.distance_to(to),
        _ => Meters::ZERO,
    }
}

pub fn travel_time(distance: Meters, speed: MetersPerSecond) -> SignedDuration {
    distance / speed
}
