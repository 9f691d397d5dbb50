// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components hold a cloneable [`DiagnosticsHandle`] and push events through
//! a bounded channel. The host drains the channel into the ring buffer with
//! [`DiagnosticsCollector::process_pending`].

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction,
    WarningEvent, WarningType,
};

/// Maximum number of events waiting in the channel before new ones are dropped.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: if the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event.
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        tracing::debug!(
            "diagnostic warning {:?}: {}",
            event.warning_type,
            event.message
        );
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning from a category and a message.
    pub fn log_warning_simple(&self, warning_type: WarningType, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(warning_type, message));
    }
}

/// An event as written to a JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// JSON report of the buffered events.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub collection_started_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

/// Central collector owning the event buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Iterates buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report of everything currently buffered.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event
                        .timestamp
                        .saturating_duration_since(self.collection_started_at)
                        .as_millis(),
                )
                .unwrap_or(u64::MAX),
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            collection_started_at: self.collection_started_at_utc,
            event_count: events.len(),
            events,
        }
    }

    /// Serializes the report to pretty JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.build_report())
    }
}
