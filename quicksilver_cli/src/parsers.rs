use jiff::{Timestamp, civil::DateTime, tz::TimeZone};

/// Accepts an RFC 3339 instant, or a civil date-time read as UTC.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, String> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    if let Ok(timestamp) = input
        .parse::<DateTime>()
        .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
    {
        return Ok(timestamp);
    }

    Err(String::from("Invalid timestamp"))
}

pub fn parse_speed(input: &str) -> Result<f64, String> {
    match input.parse::<f64>() {
        Ok(speed) if speed.is_finite() && speed > 0.0 => Ok(speed),
        Ok(_) => Err(String::from("Speed must be a positive number of meters per second")),
        Err(_) => Err(String::from("Invalid speed")),
    }
}
