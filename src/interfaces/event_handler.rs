// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculation events
// ============================================================================

use crate::domain::{Calculation, CalculationId, Operation};
use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Operation evaluated, result available
    Evaluated {
        calculation: Calculation,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected by checked evaluation
    Rejected {
        id: CalculationId,
        sequence: u64,
        operation: Operation,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        lhs: f64,
        #[cfg_attr(feature = "serde", serde(with = "crate::numeric::serde_float"))]
        rhs: f64,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub fn id(&self) -> CalculationId {
        match self {
            CalculationEvent::Evaluated { calculation, .. } => calculation.id,
            CalculationEvent::Rejected { id, .. } => *id,
        }
    }

    pub fn sequence(&self) -> u64 {
        match self {
            CalculationEvent::Evaluated { calculation, .. } => calculation.sequence,
            CalculationEvent::Rejected { sequence, .. } => *sequence,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, CalculationEvent::Rejected { .. })
    }

    /// JSON encoding for forwarding events to external consumers
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, forwarding, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain all recorded events
    pub fn take(&self) -> Vec<CalculationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}

/// Forwards events to a crossbeam channel
pub struct ChannelEventHandler {
    sender: Sender<CalculationEvent>,
}

impl ChannelEventHandler {
    pub fn new(sender: Sender<CalculationEvent>) -> Self {
        Self { sender }
    }

    /// Handler paired with the receiving end of a new unbounded channel
    pub fn unbounded() -> (Self, Receiver<CalculationEvent>) {
        let (sender, receiver) = channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl EventHandler for ChannelEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Calculator event dropped: receiver disconnected");
        }
    }
}
