use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::layer::{Context, Layer};

/// Log entries kept in the panel and in the global buffer.
pub const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: tracing::Level,
    pub timestamp: String,
    pub message: String,
    pub target: String,
}

impl LogEntry {
    pub fn new(level: tracing::Level, message: String, target: String) -> Self {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        Self {
            level,
            timestamp,
            message,
            target,
        }
    }

    /// A progress line coming from the batch worker.
    pub fn batch(message: impl Into<String>) -> Self {
        Self::new(tracing::Level::INFO, message.into(), "batch".to_string())
    }

    pub fn separator(title: &str) -> Self {
        Self::new(tracing::Level::INFO, format!("--- {} ---", title), "gui".to_string())
    }
}

static LOG_BUFFER: once_cell::sync::Lazy<Arc<Mutex<Vec<LogEntry>>>> =
    once_cell::sync::Lazy::new(|| Arc::new(Mutex::new(Vec::new())));

pub fn get_log_buffer() -> Arc<Mutex<Vec<LogEntry>>> {
    LOG_BUFFER.clone()
}

/// Appends `entry`, dropping the oldest entries past `MAX_LOG_ENTRIES`.
pub fn push_bounded(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    let len = logs.len();
    if len > MAX_LOG_ENTRIES {
        logs.drain(0..(len - MAX_LOG_ENTRIES));
    }
}

#[derive(Default)]
pub struct GuiLogLayer;

impl GuiLogLayer {
    pub fn new() -> Self {
        Self
    }
}

struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S> Layer<S> for GuiLogLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let message = if !visitor.message.is_empty() {
            visitor.message
        } else {
            metadata.target().to_string()
        };

        let log_entry = LogEntry::new(*metadata.level(), message, metadata.target().to_string());

        if let Ok(mut buf) = LOG_BUFFER.lock() {
            push_bounded(&mut buf, log_entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_bounded() {
        let mut logs = Vec::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            push_bounded(&mut logs, LogEntry::batch(format!("line {}", i)));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "line 5");
        assert_eq!(logs.last().unwrap().target, "batch");
    }
}
