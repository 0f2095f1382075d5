//! Diagnostic logging for the CLI.
//!
//! The binary logs through a `tracing-subscriber` fmt layer on stderr, so
//! stdout carries only game output. Tests swap in a capturing layer and
//! inspect the recorded events.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,cloudpoker_engine=info";

/// One recorded event with its fields rendered to text.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Shared handle to the events seen by a [`CaptureLayer`].
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            sink: self.clone(),
        }
    }
}

struct CaptureLayer {
    sink: TestLogSubscriber,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EntryFields::default();
        event.record(&mut fields);
        let meta = event.metadata();
        self.sink.lock().push(LogEntry {
            level: *meta.level(),
            target: meta.target().to_string(),
            message: fields.message,
            fields: fields.rest,
        });
    }
}

#[derive(Default)]
struct EntryFields {
    message: String,
    rest: Vec<(String, String)>,
}

impl EntryFields {
    fn put(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            name => self.rest.push((name.to_string(), value)),
        }
    }
}

impl Visit for EntryFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

/// Installs the stderr fmt subscriber. A second call is a no-op.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Routes every event of the process into one capture buffer, installed on
/// first use, and returns the buffer emptied.
pub fn init_test_logging() -> TestLogSubscriber {
    static CAPTURE: OnceLock<TestLogSubscriber> = OnceLock::new();

    let capture = CAPTURE.get_or_init(|| {
        let capture = TestLogSubscriber::default();
        let _ = tracing::subscriber::set_global_default(Registry::default().with(capture.layer()));
        capture
    });
    capture.clear();
    capture.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_layer_records_message_and_fields() {
        let capture = TestLogSubscriber::default();
        let subscriber = Registry::default().with(capture.layer());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "cloudpoker_engine::deck", remaining = 3, name = "blue", "deck low");
        });

        let entries = capture.entries();
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.level, Level::WARN);
        assert_eq!(e.target, "cloudpoker_engine::deck");
        assert_eq!(e.message, "deck low");
        assert_eq!(e.field("remaining"), Some("3"));
        assert_eq!(e.field("name"), Some("blue"));
        assert_eq!(e.field("missing"), None);

        capture.clear();
        assert!(capture.entries().is_empty());
    }
}
