use chrono::{DateTime, Datelike, TimeDelta, Utc};
use chrono_tz::Tz;
use tracing::warn;

// ── Durations ─────────────────────────────────────────────────────────────────

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Assumed length of one banner, in days. Shop rotations advance once every
/// three banners.
pub const BANNER_PERIOD_DAYS: i64 = 14;

/// Number of banner periods between consecutive shop debuts.
pub const SHOP_ROTATION_BANNERS: i64 = 3;

/// One banner period as a [`TimeDelta`].
pub fn banner_period() -> TimeDelta {
    TimeDelta::days(BANNER_PERIOD_DAYS)
}

/// Convert a time difference into fractional days.
///
/// Negative deltas stay negative.
pub fn unix_time_delta_to_days(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_DAY
}

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Falls back to `"UTC"` if detection fails.
pub fn get_system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

/// Resolve a timezone setting, where `"auto"` means the system timezone.
pub fn resolve_timezone(setting: &str) -> String {
    if setting.eq_ignore_ascii_case("auto") {
        get_system_timezone()
    } else {
        setting.to_string()
    }
}

// ── CalendarHandler ───────────────────────────────────────────────────────────

/// Maps UTC instants onto local calendar periods.
#[derive(Debug, Clone, Copy)]
pub struct CalendarHandler {
    tz: Tz,
}

impl CalendarHandler {
    /// Create a handler for the given IANA timezone name.
    ///
    /// Unrecognised names fall back to UTC with a warning.
    pub fn new(tz_name: &str) -> Self {
        let tz = tz_name.parse::<Tz>().unwrap_or_else(|_| {
            warn!(
                "CalendarHandler: unrecognised timezone \"{}\", falling back to UTC",
                tz_name
            );
            Tz::UTC
        });
        Self { tz }
    }

    /// Validate that `tz_name` is a recognised IANA timezone identifier.
    pub fn validate_timezone(tz_name: &str) -> bool {
        tz_name.parse::<Tz>().is_ok()
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Calendar quarter of `dt` in this handler's timezone, as `(year, 1..=4)`.
    pub fn quarter_of(&self, dt: DateTime<Utc>) -> (i32, u32) {
        let local = dt.with_timezone(&self.tz);
        (local.year(), local.month0() / 3 + 1)
    }

    /// Quarter label such as `"2021-Q3"`.
    pub fn quarter_label(&self, dt: DateTime<Utc>) -> String {
        let (year, quarter) = self.quarter_of(dt);
        format!("{}-Q{}", year, quarter)
    }
}

impl Default for CalendarHandler {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}
