use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::events::Event;
use crate::host::HostInfo;

/// A reaction to host events.
///
/// Observers are driven synchronously by the [`EventBus`]: `attached` once
/// when the session opens (or immediately, when subscribing to an already
/// open session), `on_event` for every event published while the session is
/// open, `detached` once when it closes.
pub trait Observer: Send {
    /// The session opened; `host` describes who is running it.
    fn attached(&mut self, host: &HostInfo) {
        let _ = host;
    }

    /// An event was published into the open session.
    fn on_event(&mut self, event: &Event);

    /// The session closed. No further calls will arrive.
    fn detached(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Open,
    Closed,
}

/// Synchronous fan-out of host events to registered observers.
///
/// Observers run in registration order on the publishing thread, so each one
/// sees events exactly as the host emitted them. The session is one-shot:
/// once closed, the bus stays closed and drops anything published into it.
pub struct EventBus {
    observers: Vec<Box<dyn Observer>>,
    state: SessionState,
    host: Option<HostInfo>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            state: SessionState::Idle,
            host: None,
        }
    }

    /// Register an observer. When the session is already open it is attached
    /// immediately; otherwise attachment happens at [`EventBus::open`].
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        let mut observer = Box::new(observer);
        if self.state == SessionState::Open
            && let Some(host) = &self.host
        {
            observer.attached(host);
        }
        self.observers.push(observer);
    }

    /// Open the session and attach every observer, in registration order.
    /// Opening twice, or after close, is ignored.
    pub fn open(&mut self, host: HostInfo) {
        if self.state != SessionState::Idle {
            tracing::debug!(state = ?self.state, "session open ignored");
            return;
        }
        tracing::debug!(cwd = %host.cwd.display(), "session opened");
        for observer in &mut self.observers {
            observer.attached(&host);
        }
        self.host = Some(host);
        self.state = SessionState::Open;
    }

    /// Deliver an event to every observer. Events published outside an open
    /// session are dropped.
    pub fn publish(&mut self, event: Event) {
        if self.state != SessionState::Open {
            tracing::debug!(?event, "event dropped outside an open session");
            return;
        }
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    /// Close the session and detach every observer. Closing is terminal and
    /// idempotent; a never-opened bus closes without detaching anyone.
    pub fn close(&mut self) {
        if self.state == SessionState::Open {
            tracing::debug!("session closed");
            for observer in &mut self.observers {
                observer.detached();
            }
        }
        self.state = SessionState::Closed;
        self.host = None;
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }
}

/// Drive an [`EventBus`] from an async host.
///
/// Opens the session, then dispatches every event sent on the returned
/// channel. Dropping the sender ends the stream and closes the session.
pub fn spawn_dispatcher(
    bus: EventBus,
    host: HostInfo,
) -> (mpsc::UnboundedSender<Event>, JoinHandle<Result<()>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(dispatch_loop(bus, host, rx));
    (tx, handle)
}

async fn dispatch_loop(
    mut bus: EventBus,
    host: HostInfo,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    bus.open(host);
    while let Some(event) = rx.recv().await {
        bus.publish(event);
    }
    bus.close();
    Ok(())
}
