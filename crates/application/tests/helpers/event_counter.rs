use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Counts every tracing event emitted while installed.
#[derive(Clone, Default)]
pub struct EventCounter {
    events: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn count(&self) -> usize {
        self.events.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
        self.events.fetch_add(1, Ordering::SeqCst);
    }
}
