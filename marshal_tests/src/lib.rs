// Test harness for the event-pump pipeline.
//
// The gdext facade drains its queue once per frame and emits one signal per
// event. `TestPump` reproduces that frame loop without Godot: tests push
// events through cloned sinks (the way SDK callback closures do) and step
// "frames" by draining.

use steambridge_core::event::{EventQueue, EventSink, SteamEvent};

/// A facade-less stand-in for the per-frame callback pump.
pub struct TestPump {
    queue: EventQueue,
    sink: EventSink,
}

impl TestPump {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let (queue, sink) = EventQueue::new();
        Self { queue, sink }
    }

    /// A producer handle, like the one cloned into every SDK closure.
    pub fn sink(&self) -> EventSink {
        self.sink.clone()
    }

    /// One frame: everything pending, oldest first.
    pub fn pump(&self) -> Vec<SteamEvent> {
        self.queue.drain()
    }
}
