// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the player, viewer and feed.
//!
//! Types here carry no UI framework or network dependencies. Only `serde`
//! derives are used, for types that travel over the API.
//!
//! # Modules
//!
//! - [`media`]: Media item types ([`MediaKind`](media::MediaKind), [`MediaItem`](media::MediaItem))
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::ZoomScale))
//! - [`video`]: Video playback value objects ([`Volume`](video::Volume))

pub mod media;
pub mod ui;
pub mod video;
