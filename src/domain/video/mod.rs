// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.

pub mod newtypes;

pub use newtypes::Volume;
