// SPDX-License-Identifier: MPL-2.0
//! Media domain types.

pub mod types;

pub use types::{MediaItem, MediaKind};
