//! Wall-clock time for effect animation

use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch as f64
pub fn millis_since_epoch(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64 * 1000.0 + (t.timestamp_subsec_nanos() as f64) * 1e-6
}

/// Current wall-clock time in milliseconds
pub fn wall_clock_ms() -> f64 {
    millis_since_epoch(Utc::now())
}
