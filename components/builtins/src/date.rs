//! Date construction.

use chrono::{DateTime, Utc};
use core_types::{ObjectKind, ObjectRef, Value};

use crate::realm::Realm;

/// Largest magnitude of a valid time value (±100,000,000 days).
const MAX_TIME: f64 = 8.64e15;

/// ECMAScript TimeClip: NaN for non-finite or out-of-range times, otherwise
/// truncated toward zero.
pub fn time_clip(time: f64) -> f64 {
    if !time.is_finite() || time.abs() > MAX_TIME {
        return f64::NAN;
    }
    // + 0.0 turns -0 into +0
    time.trunc() + 0.0
}

impl Realm {
    /// `new Date(time)`
    pub fn new_date(&self, time: f64) -> ObjectRef {
        ObjectRef::new(
            ObjectKind::Date(time_clip(time)),
            Some(self.intrinsics().date_prototype.clone()),
        )
    }

    /// `new Date()`, using the system clock.
    pub fn date_now(&self) -> ObjectRef {
        self.new_date(Utc::now().timestamp_millis() as f64)
    }

    /// `new Date(string)` for RFC 3339 strings. Anything else yields an
    /// invalid date, which is still a date object.
    pub fn parse_date(&self, text: &str) -> ObjectRef {
        let time = DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.timestamp_millis() as f64)
            .unwrap_or(f64::NAN);
        self.new_date(time)
    }
}

/// The time value of a date object.
pub fn time_value(value: &Value) -> Option<f64> {
    value
        .as_object()?
        .with_kind(|kind| match kind {
            ObjectKind::Date(time) => Some(*time),
            _ => None,
        })
        .flatten()
}
