// --- File: crates/carebook_common/src/lib.rs ---

pub mod clock; // Source of "today"
pub mod error; // Error handling
pub mod http; // Error responses
pub mod logging; // Logging utilities
pub mod navigation; // Per-visitor history with typed payloads
pub mod notifications; // Transient visitor notifications
pub mod session; // In-memory visitor sessions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, not_found, parse_error, validation_error, CarebookError, Context,
    HttpStatusCode,
};

pub use logging::{init_from_config, log_result};

pub use clock::{Clock, FixedClock, SystemClock};
pub use navigation::{HistoryEntry, Navigator, Route, MAX_HISTORY};
pub use notifications::{Notification, NotificationSink, Severity, Toaster};
pub use session::SessionStore;
