// SPDX-License-Identifier: MPL-2.0
//! Time readout helpers for the player controls.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Returns `secs` if it is a usable media time, otherwise 0.
///
/// Media elements report `NaN` before metadata loads and `Infinity` for
/// live streams; both read as "unknown".
#[inline]
#[must_use]
pub fn sanitize_secs(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        0.0
    }
}

/// Formats a media time as `m:ss`, or `h:mm:ss` from one hour on.
///
/// # Examples
///
/// ```
/// use vertex_viewer::video_player::time_units::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(75.9), "1:15");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    // Truncation is intended: a readout shows whole elapsed seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = sanitize_secs(secs).floor() as u64;
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Formats the `current / total` readout shown next to the progress bar.
#[must_use]
pub fn format_readout(current_secs: f64, duration_secs: f64) -> String {
    format!(
        "{} / {}",
        format_time(current_secs),
        format_time(duration_secs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_unknown_times() {
        assert_eq!(sanitize_secs(f64::NAN), 0.0);
        assert_eq!(sanitize_secs(f64::INFINITY), 0.0);
        assert_eq!(sanitize_secs(-3.0), 0.0);
        assert_eq!(sanitize_secs(12.5), 12.5);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn formats_hours_past_one_hour() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(36_061.0), "10:01:01");
    }

    #[test]
    fn readout_joins_current_and_total() {
        assert_eq!(format_readout(61.0, 185.0), "1:01 / 3:05");
        assert_eq!(format_readout(0.0, f64::NAN), "0:00 / 0:00");
    }
}
