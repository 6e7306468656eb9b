use serde::Serialize;
use tokio::sync::mpsc;

pub const EVENT_SNAPSHOT_APPLIED: &str = "snapshot-applied";
pub const EVENT_NEW_MESSAGE: &str = "new-message";
pub const EVENT_ACCESS_DENIED: &str = "access-denied";
pub const EVENT_SESSION_STARTED: &str = "session-started";
pub const EVENT_SESSION_ENDED: &str = "session-ended";

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotAppliedPayload {
    pub collection: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMessagePayload {
    pub channel_id: String,
    pub sender: String,
    pub message_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessDeniedPayload {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionPayload {
    pub uid: String,
}

/// One event delivered to the embedding UI.
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub name: &'static str,
    pub payload: serde_json::Value,
}

/// Sender half of the UI event channel.  Emission never fails the caller;
/// a closed channel is logged and ignored.
#[derive(Debug, Clone)]
pub struct UiNotifier {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl UiNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit<S: Serialize>(&self, event: &'static str, payload: S) {
        let payload = match serde_json::to_value(payload) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(event, error = %e, "Failed to serialize event payload");
                return;
            }
        };
        if self
            .tx
            .send(UiEvent {
                name: event,
                payload,
            })
            .is_err()
        {
            tracing::debug!(event, "UI event channel closed, dropping event");
        }
    }
}
