//! Transient, auto-expiring status messages.
//!
//! At most one notification is active. A new [`NotificationQueue::notify`]
//! replaces it and restarts the countdown. Expiry is driven by the host
//! through [`NotificationQueue::poll`] or [`NotificationQueue::expire`];
//! each `notify` returns a fresh [`ExpiryHandle`], so a deferred expiry
//! scheduled for an older message can never clear a newer one.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Default lifetime of a notification.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Source of time for notification expiry.
///
/// Times are offsets from a clock-specific origin.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> Duration;
}

/// Monotonic wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Logical clock advanced by hand.
///
/// Clones share the same time, so a test can keep one copy and hand another
/// to the queue.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn set(&self, at: Duration) {
        let millis = u64::try_from(at.as_millis()).unwrap_or(u64::MAX);
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Notification kind; decides icon and colour in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

/// A user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Clock time at which the notification was shown.
    pub issued_at: Duration,
}

/// Token identifying one `notify` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryHandle(u64);

#[derive(Debug, Clone)]
struct Active {
    notification: Notification,
    deadline: Duration,
    handle: ExpiryHandle,
}

/// Holds at most one active notification.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    clock: Arc<dyn Clock>,
    timeout: Duration,
    active: Option<Active>,
    generation: u64,
}

impl NotificationQueue {
    pub fn new(clock: Arc<dyn Clock>, timeout: Duration) -> Self {
        Self {
            clock,
            timeout,
            active: None,
            generation: 0,
        }
    }

    /// Queue on the system clock with the default timeout.
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock::new()), DEFAULT_TIMEOUT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Show `message`, replacing any active notification.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> ExpiryHandle {
        let now = self.clock.now();
        self.generation += 1;
        let handle = ExpiryHandle(self.generation);
        let notification = Notification {
            message: message.into(),
            kind,
            issued_at: now,
        };
        tracing::debug!(message = %notification.message, ?kind, "Notification shown");
        self.active = Some(Active {
            notification,
            deadline: now.saturating_add(self.timeout),
            handle,
        });
        handle
    }

    /// Active notification, unless its deadline has passed.
    pub fn current(&self) -> Option<&Notification> {
        let now = self.clock.now();
        self.active
            .as_ref()
            .filter(|active| now < active.deadline)
            .map(|active| &active.notification)
    }

    /// Whether `handle` still refers to the active notification.
    pub fn is_live(&self, handle: ExpiryHandle) -> bool {
        self.active.as_ref().is_some_and(|a| a.handle == handle)
    }

    /// Deferred expiry for `handle`. Returns `false` for a stale handle.
    pub fn expire(&mut self, handle: ExpiryHandle) -> bool {
        if !self.is_live(handle) {
            return false;
        }
        self.active = None;
        true
    }

    /// Drop the active notification once its deadline has passed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        match &self.active {
            Some(active) if now >= active.deadline => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Clock time at which the active notification expires.
    pub fn pending_deadline(&self) -> Option<Duration> {
        self.active.as_ref().map(|a| a.deadline)
    }

    /// Remove the active notification and cancel its expiry.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_system_clock()
    }
}
