// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the viewer widgets.

pub mod button;
pub mod container;
