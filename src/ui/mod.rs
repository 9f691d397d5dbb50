// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! has a `State`, a `Message` enum, an `Effect` enum and a `handle` method.
//!
//! - [`viewer`] - Media viewer shell with video playback and image zoom/pan
//! - [`state`] - Reusable interaction state (drag)
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod viewer;
