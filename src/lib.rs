// SPDX-License-Identifier: MPL-2.0
//! `vertex_viewer` is the headless client core of the Xynoos Vertex app.
//!
//! It provides the media viewer (video playback and image zoom/pan), the
//! feed with optimistic like/save toggles, the order price estimator and a
//! typed client for the backend API. Hosts render through the iced views in
//! [`ui`] and bind a real media element via [`application::port`].

#![doc(html_root_url = "https://docs.rs/vertex_viewer/0.1.0")]

pub mod api;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod order;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
