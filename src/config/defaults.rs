// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Video playback volume bounds and keyboard step
//! - **Controls**: Auto-hide delay for the player controls
//! - **Seek**: Keyboard seek step
//! - **Autoplay**: Visibility threshold for inline feed playback
//! - **Zoom**: Image zoom bounds, wheel sensitivity, double-click scale
//! - **Diagnostics**: Event buffer capacity
//! - **API**: Default base URL of the external API

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default video playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP: f32 = 0.05;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default delay before the player controls hide while playing (ms).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Minimum controls hide delay (ms).
pub const MIN_CONTROLS_HIDE_DELAY_MS: u64 = 500;

/// Maximum controls hide delay (ms).
pub const MAX_CONTROLS_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default keyboard seek step in seconds (arrow keys).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = 5.0;

/// Minimum keyboard seek step in seconds.
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum keyboard seek step in seconds.
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Fraction of the player that must be visible before inline autoplay starts.
pub const DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Identity scale (no zoom).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum image zoom scale.
pub const MAX_ZOOM_SCALE: f32 = 4.0;

/// Scale change per wheel delta unit.
pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.002;

/// Scale applied when double-clicking an unzoomed image.
pub const DEFAULT_DOUBLE_CLICK_SCALE: f32 = 2.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Controls validation
    assert!(MIN_CONTROLS_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS <= MAX_CONTROLS_HIDE_DELAY_MS);

    // Seek validation
    assert!(MIN_KEYBOARD_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS >= MIN_KEYBOARD_SEEK_STEP_SECS);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS <= MAX_KEYBOARD_SEEK_STEP_SECS);

    // Autoplay validation
    assert!(DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD > 0.0);
    assert!(DEFAULT_AUTOPLAY_VISIBILITY_THRESHOLD <= 1.0);

    // Zoom validation
    assert!(MIN_ZOOM_SCALE == 1.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(DEFAULT_DOUBLE_CLICK_SCALE > MIN_ZOOM_SCALE);
    assert!(DEFAULT_DOUBLE_CLICK_SCALE <= MAX_ZOOM_SCALE);
    assert!(DEFAULT_WHEEL_SENSITIVITY > 0.0);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
