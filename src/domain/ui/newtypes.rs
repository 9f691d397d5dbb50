// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.

use crate::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};

/// Image zoom scale, guaranteed to be within 1.0–4.0.
///
/// 1.0 is the identity: the image fills the viewport unzoomed.
///
/// # Example
///
/// ```
/// use vertex_viewer::domain::ui::ZoomScale;
///
/// assert_eq!(ZoomScale::new(6.0).value(), 4.0);
/// assert_eq!(ZoomScale::new(0.2).value(), 1.0);
/// assert!(ZoomScale::default().is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping to the valid range. NaN maps to identity.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::IDENTITY;
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    pub const IDENTITY: Self = Self(MIN_ZOOM_SCALE);

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Returns a new scale offset by `delta`, clamped.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}
