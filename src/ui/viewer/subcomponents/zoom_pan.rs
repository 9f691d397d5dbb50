// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan sub-component for the image viewer.
//!
//! The wheel changes the scale, dragging pans a zoomed image and a double
//! click toggles between the identity and a fixed zoom. The pan offset is
//! only applied while zoomed: at scale 1 [`State::transform`] is `None`.

use crate::config::{ViewerConfig, DEFAULT_DOUBLE_CLICK_SCALE, DEFAULT_WHEEL_SENSITIVITY};
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::domain::ui::ZoomScale;
use crate::ui::state::DragState;
use iced::mouse::Interaction;
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Scale and pan offset to render the image with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f32,
    /// Pan offset in logical pixels.
    pub offset: Vector,
}

/// Pointer cursor to show over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    /// Unzoomed: clicking zooms in.
    ZoomIn,
    /// Zoomed: the image can be grabbed.
    Grab,
    /// A pan is in progress.
    Grabbing,
}

impl CursorAffordance {
    #[must_use]
    pub fn interaction(self) -> Interaction {
        match self {
            CursorAffordance::ZoomIn => Interaction::ZoomIn,
            CursorAffordance::Grab => Interaction::Grab,
            CursorAffordance::Grabbing => Interaction::Grabbing,
        }
    }
}

/// Zoom/pan sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    scale: ZoomScale,
    offset: Vector,
    drag: DragState,
    /// Last click timestamp for double-click detection.
    last_click: Option<Instant>,
    wheel_sensitivity: f32,
    double_click_scale: ZoomScale,
    diagnostics: Option<DiagnosticsHandle>,
}

/// Messages for the zoom/pan sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse wheel scrolled; positive `delta_y` zooms out.
    Wheel { delta_y: f32 },
    /// Pointer pressed over the image.
    PointerDown(Point),
    /// Pointer moved.
    PointerMoved(Point),
    /// Pointer released.
    PointerUp,
    /// Click detected (for double-click).
    Click(Point),
    /// Double click reported directly by the host.
    DoubleClick,
    /// Reset zoom and pan.
    Reset,
}

/// Effects produced by zoom/pan changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Scale or offset changed; the view needs a redraw.
    TransformChanged,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl State {
    /// Creates an unzoomed state using the `[viewer]` settings.
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        let wheel_sensitivity = config
            .wheel_sensitivity
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_WHEEL_SENSITIVITY);
        let double_click_scale = config
            .double_click_scale
            .map(ZoomScale::new)
            .filter(|s| !s.is_identity())
            .unwrap_or_else(|| ZoomScale::new(DEFAULT_DOUBLE_CLICK_SCALE));

        Self {
            scale: ZoomScale::IDENTITY,
            offset: Vector::ZERO,
            drag: DragState::default(),
            last_click: None,
            wheel_sensitivity,
            double_click_scale,
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Handle a zoom/pan message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.handle_at(msg, Instant::now())
    }

    /// Handle a zoom/pan message at a given instant (click timing).
    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Wheel { delta_y } => {
                if !delta_y.is_finite() {
                    return Effect::None;
                }
                let scale = self.scale.offset_by(-delta_y * self.wheel_sensitivity);
                self.set_scale(scale)
            }
            Message::PointerDown(position) => {
                // Panning is meaningless at scale 1
                if !self.scale.is_identity() {
                    self.drag.start(position);
                }
                Effect::None
            }
            Message::PointerMoved(position) => match self.drag.advance(position) {
                Some(delta) if delta != Vector::ZERO => {
                    self.offset = self.offset + delta;
                    Effect::TransformChanged
                }
                _ => Effect::None,
            },
            Message::PointerUp => {
                self.drag.stop();
                Effect::None
            }
            Message::Click(_) => {
                let is_double_click = self
                    .last_click
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

                if is_double_click {
                    self.last_click = None; // Reset to avoid triple-click
                    self.toggle_zoom()
                } else {
                    self.last_click = Some(now);
                    Effect::None
                }
            }
            Message::DoubleClick => self.toggle_zoom(),
            Message::Reset => {
                self.log_action(UserAction::ResetZoom);
                self.reset()
            }
        }
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// The raw pan offset. Only meaningful while zoomed.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// The transform to render, or `None` at scale 1.
    #[must_use]
    pub fn transform(&self) -> Option<ImageTransform> {
        (!self.scale.is_identity()).then_some(ImageTransform {
            scale: self.scale.value(),
            offset: self.offset,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> CursorAffordance {
        if self.drag.is_dragging {
            CursorAffordance::Grabbing
        } else if self.scale.is_identity() {
            CursorAffordance::ZoomIn
        } else {
            CursorAffordance::Grab
        }
    }

    fn set_scale(&mut self, scale: ZoomScale) -> Effect {
        if scale == self.scale {
            return Effect::None;
        }
        self.scale = scale;
        if scale.is_identity() {
            self.drag.stop();
        }
        Effect::TransformChanged
    }

    fn toggle_zoom(&mut self) -> Effect {
        let effect = if self.scale.is_identity() {
            self.set_scale(self.double_click_scale)
        } else {
            self.reset()
        };
        self.log_action(UserAction::ToggleZoom {
            scale: self.scale.value(),
        });
        effect
    }

    fn reset(&mut self) -> Effect {
        let changed = !self.scale.is_identity() || self.offset != Vector::ZERO;
        self.scale = ZoomScale::IDENTITY;
        self.offset = Vector::ZERO;
        self.drag.stop();
        if changed {
            Effect::TransformChanged
        } else {
            Effect::None
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}
