// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Reusable interaction state shared by viewer sub-components.

pub mod drag;

pub use drag::DragState;
