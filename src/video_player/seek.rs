// SPDX-License-Identifier: MPL-2.0
//! Scrubbing geometry: pointer position on the progress track to media time.

use super::time_units::sanitize_secs;
use iced::Rectangle;

/// Returns the position of `pointer_x` along `track` as a ratio in 0.0–1.0.
///
/// Returns `None` for a collapsed track (zero or negative width) or a
/// non-finite pointer.
#[must_use]
pub fn track_ratio(pointer_x: f32, track: Rectangle) -> Option<f64> {
    if track.width <= 0.0 || !track.width.is_finite() || !pointer_x.is_finite() {
        return None;
    }
    let ratio = (f64::from(pointer_x) - f64::from(track.x)) / f64::from(track.width);
    Some(ratio.clamp(0.0, 1.0))
}

/// Returns the media time to seek to, or `None` if the seek is a no-op
/// (unknown duration or collapsed track).
#[must_use]
pub fn seek_target(pointer_x: f32, track: Rectangle, duration_secs: f64) -> Option<f64> {
    let duration = sanitize_secs(duration_secs);
    if duration <= 0.0 {
        return None;
    }
    track_ratio(pointer_x, track).map(|ratio| ratio * duration)
}
