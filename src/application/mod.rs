// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts implement application layer ports (a browser `<video>` binding,
//!   a native decoder, a test double)
//! - Components in `video_player` and `ui` only talk to the ports

pub mod port;
