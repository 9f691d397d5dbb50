// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer shell.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The shell in component.rs owns one of them while open.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (shell)
//!     ├── video_playback - Video player for `video` items
//!     └── zoom_pan       - Zoom and pan for `image` items
//! ```

pub mod video_playback;
pub mod zoom_pan;
