//! # Recurring Window Scheduler
//!
//! Scheduling core for the workload-balancing automation: operators declare
//! recurring weekly **migration windows** (automation explicitly permitted)
//! and **blackout windows** (automation explicitly prohibited), and this
//! crate answers, for any UTC instant, whether an automated action may run.
//!
//! ## Architecture
//!
//! The crate is organized into a small set of logical modules:
//!
//! - [`api`]: the window/schedule data model and verdict types
//! - [`models`]: value types (minute-of-day) and validated JSON loading
//! - [`services`]: evaluation, overlap detection, and schedule editing
//! - [`error`]: the validation error taxonomy
//!
//! ## Semantics
//!
//! All operations are pure functions over immutable `Schedule` snapshots.
//! Blackout windows always win over migration windows; an empty migration
//! list means "always permitted" outside blackouts; windows whose end time
//! precedes their start time wrap past midnight into the following calendar
//! day. All wall-clock arithmetic uses the schedule's IANA timezone with the
//! zone's offset at the evaluated instant, so DST transitions are honored.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
