// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`media_element`]: Control surface of a single video element
//!
//! # Design Notes
//!
//! - Traits use domain types only (no iced handles, no DOM types)
//! - Methods are synchronous; asynchronous outcomes come back as
//!   [`ElementEvent`](crate::video_player::ElementEvent) messages

pub mod media_element;

pub use media_element::{MediaElement, MediaError};
