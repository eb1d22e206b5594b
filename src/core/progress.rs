//! Progress reporting from the batch runner to whatever drives it.
use std::sync::mpsc::Sender;

use tracing::{debug, info};

use crate::types::RunOutcome;

/// Receives log lines, progress and the final outcome of a batch.
///
/// Called from the worker thread; implementations must not block for long.
pub trait ProgressSink {
    fn log(&self, line: &str);
    fn advance(&self, current: usize, total: usize);
    fn finish(&self, outcome: &RunOutcome);
}

impl<S: ProgressSink + ?Sized> ProgressSink for &S {
    fn log(&self, line: &str) {
        (**self).log(line)
    }

    fn advance(&self, current: usize, total: usize) {
        (**self).advance(current, total)
    }

    fn finish(&self, outcome: &RunOutcome) {
        (**self).finish(outcome)
    }
}

/// Writes everything through `tracing`. Used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn log(&self, line: &str) {
        info!("{}", line);
    }

    fn advance(&self, current: usize, total: usize) {
        debug!("Progress: {}/{}", current, total);
    }

    fn finish(&self, outcome: &RunOutcome) {
        let report = outcome.report();
        info!(
            processed = report.processed,
            total = report.total,
            launch_failures = report.launch_failures,
            tool_errors = report.tool_errors,
            cancelled = outcome.is_cancelled(),
            "Batch finished"
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    Log(String),
    Progress { current: usize, total: usize },
    Finished(RunOutcome),
}

/// Forwards events over an mpsc channel. Used by the GUI, which drains the
/// receiver every frame.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<BatchEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<BatchEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: BatchEvent) {
        // Receiver gone means the window closed; nothing left to report to.
        let _ = self.tx.send(event);
    }
}

impl ProgressSink for ChannelSink {
    fn log(&self, line: &str) {
        self.send(BatchEvent::Log(line.to_string()));
    }

    fn advance(&self, current: usize, total: usize) {
        self.send(BatchEvent::Progress { current, total });
    }

    fn finish(&self, outcome: &RunOutcome) {
        self.send(BatchEvent::Finished(*outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchReport;
    use std::sync::mpsc;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct LevelRecorder(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for LevelRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn tracing_sink_reports_outcome_at_info() {
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(LevelRecorder(levels.clone()));

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.advance(1, 2);
            TracingSink.finish(&RunOutcome::Completed(BatchReport {
                total: 2,
                processed: 2,
                ..Default::default()
            }));
        });

        assert_eq!(*levels.lock().unwrap(), vec![Level::DEBUG, Level::INFO]);
    }

    #[test]
    fn channel_sink_forwards_in_order() {
        let (tx, rx) = mpsc::channel();
        let sink = ChannelSink::new(tx);
        sink.log("[1/1] Cleaning a.jpg");
        sink.advance(1, 1);
        let outcome = RunOutcome::Completed(BatchReport {
            total: 1,
            processed: 1,
            ..Default::default()
        });
        sink.finish(&outcome);

        let events: Vec<BatchEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                BatchEvent::Log("[1/1] Cleaning a.jpg".to_string()),
                BatchEvent::Progress {
                    current: 1,
                    total: 1
                },
                BatchEvent::Finished(outcome),
            ]
        );
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let sink = ChannelSink::new(tx);
        sink.log("nobody listening");
        sink.finish(&RunOutcome::NothingToDo);
    }
}
