//! Draft-based editing of the analytical report.
//!
//! The committed [`ReportConfiguration`](report_model::ReportConfiguration)
//! lives in a [`ConfigStore`]. Changes go through a [`SectionEditor`] that
//! keeps one isolated draft at a time, and every user-visible outcome is
//! announced through a [`NotificationQueue`]. [`ReportSession`] ties these
//! together for the presentation layer.
//!
//! # Module Organization
//!
//! - [`store`]: Committed configuration and revision counter
//! - [`editor`]: Draft lifecycle, re-entry policy, record id allocation
//! - [`notify`]: Single-slot notifications with clock-driven expiry
//! - [`session`]: Edit mode, success/error notifications, export
//! - [`settings`]: TOML editor settings
//! - [`logging`]: Subscriber setup for hosts
//! - [`error`]: Editor and session errors

pub mod editor;
pub mod error;
pub mod logging;
pub mod notify;
pub mod session;
pub mod settings;
pub mod store;

pub use editor::{EditState, RecordIdAllocator, ReentryPolicy, SectionEditor};
pub use error::{EditError, Result, SessionError};
pub use notify::{
    Clock, DEFAULT_TIMEOUT, ExpiryHandle, ManualClock, Notification, NotificationKind,
    NotificationQueue, SystemClock,
};
pub use session::ReportSession;
pub use settings::EditorSettings;
pub use store::ConfigStore;
