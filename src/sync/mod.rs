//! Best-effort synchronization with the remote seat store.
//!
//! The remote endpoint is an opaque key-value blob store reached over
//! HTTP: GET returns `{"status": "success", "data": {seatId: group}}`,
//! POST accepts the full serialized mapping as a fire-and-forget
//! write. Network calls run on background threads and report back
//! through a message channel polled by the main event loop, so the UI
//! never blocks.
//!
//! Pushes are debounced: every mutation resets a single-shot deadline,
//! and only when it elapses is the whole mapping sent. Failures set a
//! status indicator and are never retried.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::models::SeatMap;

/// Sync status tracking, surfaced in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// No sync activity and no pending changes
    Idle,
    /// Startup pull in flight
    Loading,
    /// Changes pending or a push in flight
    Saving,
    /// Last pull or push failed
    Error,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Idle => write!(f, "idle"),
            SyncStatus::Loading => write!(f, "loading..."),
            SyncStatus::Saving => write!(f, "saving..."),
            SyncStatus::Error => write!(f, "error"),
        }
    }
}

/// Messages sent from network threads back to the main thread.
#[derive(Debug)]
enum SyncMessage {
    /// Pull finished; `Ok(Some)` carries the remote mapping, `Ok(None)`
    /// means the store had no usable data.
    PullComplete(Result<Option<SeatMap>, String>),
    /// Push finished.
    PushComplete(Result<(), String>),
}

/// Shape of the GET response. Anything that fails to parse, or any
/// status other than "success", is treated as "no data".
#[derive(Debug, Deserialize)]
struct PullResponse {
    status: String,
    #[serde(default)]
    data: Option<BTreeMap<String, String>>,
}

/// Cancel-and-reschedule single-shot timer for push debouncing.
///
/// Time is passed in explicitly so the collapse semantics are testable
/// without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Creates an idle timer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Resets the deadline to `now + delay`. Bursts of mutations keep
    /// pushing the deadline out, collapsing into one eventual fire.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Takes the deadline if it has elapsed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a fire is scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Cancels any scheduled fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Sync state owned by the application.
pub struct SyncState {
    /// Remote endpoint URL; `None` disables sync entirely.
    endpoint: Option<String>,
    /// Current status for the indicator.
    pub status: SyncStatus,
    /// Human-readable detail for the status bar.
    pub last_message: String,
    /// Push debounce timer.
    debounce: DebounceTimer,
    receiver: Receiver<SyncMessage>,
    sender: Sender<SyncMessage>,
}

/// A sync outcome the application must act on.
#[derive(Debug)]
pub enum SyncEvent {
    /// A pull completed with remote data; replace local state wholesale.
    RemoteState(SeatMap),
    /// Status or message changed; re-render is enough.
    StatusChanged,
}

impl SyncState {
    /// Creates sync state. `endpoint = None` runs fully offline.
    #[must_use]
    pub fn new(endpoint: Option<String>, debounce_delay: Duration) -> Self {
        let (sender, receiver) = channel();
        Self {
            endpoint,
            status: SyncStatus::Idle,
            last_message: String::new(),
            debounce: DebounceTimer::new(debounce_delay),
            receiver,
            sender,
        }
    }

    /// Whether sync is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Starts the one-time startup pull on a background thread.
    pub fn start_pull(&mut self) {
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };

        self.status = SyncStatus::Loading;
        self.last_message = "Loading remote state...".to_string();

        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = fetch_remote(&endpoint).map_err(|e| format!("{e:#}"));
            let _ = sender.send(SyncMessage::PullComplete(result));
        });
    }

    /// Records a mutation: resets the debounce deadline.
    pub fn note_mutation(&mut self, now: Instant) {
        if !self.is_enabled() {
            return;
        }
        self.debounce.reset(now);
        self.status = SyncStatus::Saving;
        self.last_message = "Saving...".to_string();
    }

    /// Fires the debounced push if its deadline has elapsed.
    ///
    /// Call once per event-loop tick with the current mapping. The
    /// mapping is snapshotted here; a push in flight is never canceled
    /// by later mutations.
    pub fn tick(&mut self, now: Instant, map: &SeatMap) {
        if self.debounce.fire_if_due(now) {
            self.start_push(map);
        }
    }

    /// Serializes the full mapping and sends it fire-and-forget.
    fn start_push(&mut self, map: &SeatMap) {
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };

        let body = match serde_json::to_string(&map.to_wire()) {
            Ok(body) => body,
            Err(e) => {
                self.status = SyncStatus::Error;
                self.last_message = format!("Save failed: {e}");
                return;
            }
        };

        self.status = SyncStatus::Saving;
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = push_remote(&endpoint, body).map_err(|e| format!("{e:#}"));
            let _ = sender.send(SyncMessage::PushComplete(result));
        });
    }

    /// Polls the message channel for completed network calls.
    pub fn poll(&mut self) -> Option<SyncEvent> {
        let message = self.receiver.try_recv().ok()?;
        match message {
            SyncMessage::PullComplete(Ok(Some(map))) => {
                self.status = SyncStatus::Idle;
                self.last_message = "Synced".to_string();
                Some(SyncEvent::RemoteState(map))
            }
            SyncMessage::PullComplete(Ok(None)) => {
                // No usable remote data; local state stays empty.
                self.status = SyncStatus::Idle;
                self.last_message = "No remote data".to_string();
                Some(SyncEvent::StatusChanged)
            }
            SyncMessage::PullComplete(Err(e)) => {
                self.status = SyncStatus::Error;
                self.last_message = format!("Load failed: {e}");
                Some(SyncEvent::StatusChanged)
            }
            SyncMessage::PushComplete(Ok(())) => {
                // Saving continues if another burst re-armed the timer.
                if !self.debounce.is_pending() {
                    self.status = SyncStatus::Idle;
                    self.last_message = "Saved".to_string();
                }
                Some(SyncEvent::StatusChanged)
            }
            SyncMessage::PushComplete(Err(e)) => {
                self.status = SyncStatus::Error;
                self.last_message = format!("Save failed: {e}");
                Some(SyncEvent::StatusChanged)
            }
        }
    }

    /// Pushes synchronously if a debounced push is still pending.
    ///
    /// Used on quit so the last edits are not lost. Best effort: the
    /// error, if any, is returned but there is nothing left to retry.
    pub fn flush_blocking(&mut self, map: &SeatMap) -> Result<()> {
        if !self.debounce.is_pending() {
            return Ok(());
        }
        self.debounce.cancel();

        let Some(endpoint) = self.endpoint.clone() else {
            return Ok(());
        };
        let body = serde_json::to_string(&map.to_wire()).context("Failed to serialize seat map")?;
        push_remote(&endpoint, body)
    }
}

/// GET the remote blob and parse it into a seat map.
///
/// Returns `Ok(None)` when the store responds but carries no usable
/// data (non-"success" status or missing `data`).
fn fetch_remote(endpoint: &str) -> Result<Option<SeatMap>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let response: PullResponse = client
        .get(endpoint)
        .send()
        .context("Failed to reach remote store")?
        .json()
        .context("Failed to parse remote response")?;

    if response.status != "success" {
        return Ok(None);
    }
    let Some(data) = response.data else {
        return Ok(None);
    };

    Ok(Some(SeatMap::from_wire(
        data.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )))
}

/// POST the serialized mapping. Fire-and-forget: the response body is
/// never read, matching the write-only contract of the store.
fn push_remote(endpoint: &str, body: String) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    client
        .post(endpoint)
        .body(body)
        .send()
        .context("Failed to push to remote store")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, SeatId};

    #[test]
    fn test_status_display() {
        assert_eq!(SyncStatus::Idle.to_string(), "idle");
        assert_eq!(SyncStatus::Loading.to_string(), "loading...");
        assert_eq!(SyncStatus::Saving.to_string(), "saving...");
        assert_eq!(SyncStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_debounce_collapses_bursts() {
        let delay = Duration::from_secs(2);
        let mut timer = DebounceTimer::new(delay);
        let start = Instant::now();

        // Three rapid mutations within the delay window.
        timer.reset(start);
        timer.reset(start + Duration::from_millis(500));
        timer.reset(start + Duration::from_millis(900));

        // Not due relative to the *last* mutation.
        assert!(!timer.fire_if_due(start + Duration::from_millis(2000)));
        // Due exactly one delay after the last mutation - a single fire.
        assert!(timer.fire_if_due(start + Duration::from_millis(2900)));
        // And only one.
        assert!(!timer.fire_if_due(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_debounce_idle_never_fires() {
        let mut timer = DebounceTimer::new(Duration::from_secs(2));
        assert!(!timer.is_pending());
        assert!(!timer.fire_if_due(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_debounce_cancel() {
        let mut timer = DebounceTimer::new(Duration::from_millis(1));
        let now = Instant::now();
        timer.reset(now);
        timer.cancel();
        assert!(!timer.fire_if_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_pull_response_success_shape() {
        let json = r#"{"status":"success","data":{"block1-r1-c1":"B"}}"#;
        let parsed: PullResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "success");
        let data = parsed.data.unwrap();
        assert_eq!(data.get("block1-r1-c1").map(String::as_str), Some("B"));
    }

    #[test]
    fn test_pull_response_other_status() {
        let json = r#"{"status":"empty"}"#;
        let parsed: PullResponse = serde_json::from_str(json).unwrap();
        assert_ne!(parsed.status, "success");
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_push_payload_shape() {
        let mut map = SeatMap::new();
        map.set(SeatId::new(1, 1, 1).unwrap(), Some(Group::B));
        map.set(SeatId::new(2, 4, 7).unwrap(), Some(Group::H));

        let body = serde_json::to_string(&map.to_wire()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("block1-r1-c1").map(String::as_str), Some("B"));
        assert_eq!(parsed.get("block2-r4-c7").map(String::as_str), Some("H"));
    }

    #[test]
    fn test_offline_state_stays_idle() {
        let mut sync = SyncState::new(None, Duration::from_secs(2));
        assert!(!sync.is_enabled());

        sync.start_pull();
        sync.note_mutation(Instant::now());
        assert_eq!(sync.status, SyncStatus::Idle);
        assert!(!sync.debounce.is_pending());
        assert!(sync.poll().is_none());
    }

    #[test]
    fn test_mutation_sets_saving_status() {
        let mut sync = SyncState::new(
            Some("http://localhost:9/store".to_string()),
            Duration::from_secs(2),
        );
        sync.note_mutation(Instant::now());
        assert_eq!(sync.status, SyncStatus::Saving);
        assert!(sync.debounce.is_pending());
    }
}
