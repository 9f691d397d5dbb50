// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording user actions and swallowed failures.
//!
//! Media element failures (autoplay rejection, fullscreen rejection) and
//! stale server answers never reach the user. They are recorded here so
//! they can still be inspected.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped user action or warning
//! - [`DiagnosticsCollector`]: Owns the buffer and exports JSON reports
//! - [`DiagnosticsHandle`]: Cloneable sender held by components

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{
    CloseReason, DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType,
};
