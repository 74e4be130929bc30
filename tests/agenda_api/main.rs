//! Agenda API Test Suite
//!
//! Exercises the public facade end to end: sessions, id allocation,
//! ownership isolation, audit notifications, snapshots and concurrency.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test agenda_api
//!
//! # Ownership tests only
//! cargo test --test agenda_api ownership::
//! ```

use std::sync::Arc;

pub use agenda::prelude::*;

pub mod concurrency;
pub mod snapshots;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Create a permissive agenda with a notification log attached
pub fn create_agenda() -> (Agenda, Arc<NotificationLog>) {
    let log = Arc::new(NotificationLog::new());
    let agenda = Agenda::builder()
        .observer(log.clone())
        .build()
        .expect("Failed to build agenda");
    (agenda, log)
}

/// Create an owner-only agenda with a notification log attached
pub fn create_owner_only_agenda() -> (Agenda, Arc<NotificationLog>) {
    let log = Arc::new(NotificationLog::new());
    let agenda = Agenda::builder()
        .owner_only()
        .observer(log.clone())
        .build()
        .expect("Failed to build agenda");
    (agenda, log)
}

/// Install a test subscriber so ledger logs show up under `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
