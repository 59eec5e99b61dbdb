// Dictionary events for front-end notification
// Defines event payloads and emission trait for testability

use serde::Serialize;
use std::sync::mpsc::Sender;

/// Event names as constants for consistency
pub mod event_names {
    pub const STATUS: &str = "status";
    pub const ENTRY_ADDED: &str = "entry_added";
}

/// Kind of status message reported by the dictionary store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Dictionary file is being read
    Reading,
    /// Dictionary file was read successfully
    Loaded,
    /// Dictionary file exists but could not be read or parsed
    LoadFailed,
    /// Lookup found a translation
    Found,
    /// Lookup found nothing
    NotFound,
    /// Insert rejected because a field was blank
    EmptyInput,
    /// Insert declined at the duplicate prompt
    Cancelled,
    /// Insert completed
    Added,
    /// Dictionary file could not be written
    SaveFailed,
}

impl StatusKind {
    /// How long a front end should keep the message on screen
    pub fn display_ms(self) -> u64 {
        match self {
            StatusKind::Reading => 5000,
            StatusKind::Found | StatusKind::Added => 2000,
            _ => 3000,
        }
    }

    /// Default human-readable message for this status
    pub fn default_message(self) -> &'static str {
        match self {
            StatusKind::Reading => "Reading dictionary...",
            StatusKind::Loaded => "Dictionary loaded",
            StatusKind::LoadFailed => "❌ Failed to read dictionary",
            StatusKind::Found => "✅ Translation found",
            StatusKind::NotFound => "⚠️ Not found, filled into the add field",
            StatusKind::EmptyInput => "❌ Empty input, nothing added",
            StatusKind::Cancelled => "⛔ Add cancelled",
            StatusKind::Added => "✅ Added",
            StatusKind::SaveFailed => "❌ Failed to save dictionary",
        }
    }
}

/// Payload for status event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    /// What happened
    pub kind: StatusKind,
    /// Human-readable message
    pub message: String,
    /// Suggested display duration in milliseconds
    pub display_ms: u64,
    /// ISO 8601 timestamp when the status was raised
    pub timestamp: String,
}

impl StatusPayload {
    /// Build a payload with the default message for `kind`
    pub fn new(kind: StatusKind) -> Self {
        Self::with_message(kind, kind.default_message())
    }

    /// Build a payload with a custom message
    pub fn with_message(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            display_ms: kind.display_ms(),
            timestamp: current_timestamp(),
        }
    }
}

/// Payload for entry_added event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryAddedPayload {
    /// Source term that was written
    pub source: String,
    /// Target term now stored for the source
    pub target: String,
    /// Previous target when an existing source was overwritten
    pub replaced: Option<String>,
}

/// Any event raised by the dictionary store
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryEvent {
    Status(StatusPayload),
    EntryAdded(EntryAddedPayload),
}

impl DictionaryEvent {
    /// Event name, as listed in [`event_names`]
    pub fn name(&self) -> &'static str {
        match self {
            DictionaryEvent::Status(_) => event_names::STATUS,
            DictionaryEvent::EntryAdded(_) => event_names::ENTRY_ADDED,
        }
    }
}

/// Trait for emitting dictionary events
/// Allows mocking in tests while using a channel in production
pub trait DictionaryEventEmitter: Send + Sync {
    /// Emit status event
    fn emit_status(&self, payload: StatusPayload);

    /// Emit entry_added event
    fn emit_entry_added(&self, payload: EntryAddedPayload);
}

/// Emitter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventEmitter;

impl DictionaryEventEmitter for NoopEventEmitter {
    fn emit_status(&self, _payload: StatusPayload) {}

    fn emit_entry_added(&self, _payload: EntryAddedPayload) {}
}

/// Helper macro to send events with error logging
macro_rules! send_or_warn {
    ($sender:expr, $event:expr) => {{
        let event = $event;
        let name = event.name();
        if let Err(e) = $sender.send(event) {
            crate::warn!("Failed to emit event '{}': {}", name, e);
        }
    }};
}

/// Channel-backed emitter; the receiving end is the notification subscription
#[derive(Debug, Clone)]
pub struct ChannelEventEmitter {
    sender: Sender<DictionaryEvent>,
}

impl ChannelEventEmitter {
    /// Create a new emitter sending into the given channel
    pub fn new(sender: Sender<DictionaryEvent>) -> Self {
        Self { sender }
    }
}

impl DictionaryEventEmitter for ChannelEventEmitter {
    fn emit_status(&self, payload: StatusPayload) {
        send_or_warn!(self.sender, DictionaryEvent::Status(payload));
    }

    fn emit_entry_added(&self, payload: EntryAddedPayload) {
        send_or_warn!(self.sender, DictionaryEvent::EntryAdded(payload));
    }
}

/// Get the current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
