// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the Vertex backend.

mod client;

pub use client::{ApiClient, AVATAR_FIELD};
