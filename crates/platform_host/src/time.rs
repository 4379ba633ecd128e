//! Wall-clock helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock time of day.
pub struct LocalClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the current local time of day.
///
/// Native targets have no timezone database available here and report UTC.
pub fn local_clock_time_now() -> LocalClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        LocalClockTime {
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = unix_time_ms_now() / 1000;
        let minutes_of_day = (secs / 60) % (24 * 60);
        LocalClockTime {
            hour: (minutes_of_day / 60) as u32,
            minute: (minutes_of_day % 60) as u32,
        }
    }
}
