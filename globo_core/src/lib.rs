#![forbid(unsafe_code)]

//! Core domain model and business logic for the Globo workout reminder.
//!
//! This crate provides:
//! - Domain types (exercises, routines, workouts)
//! - The built-in workout catalog
//! - Weekly program construction (A/B alternation, recovery rotation)
//! - Rendering (HTML and Markdown)
//! - Delivery sinks (SMTP email, Todoist)

pub mod exercise;
pub mod routine;
pub mod workout;
pub mod catalog;
pub mod program;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use exercise::{Exercise, Markup};
pub use routine::Routine;
pub use workout::Workout;
pub use catalog::{build_catalog, Catalog};
pub use program::{ProgramKind, WeekCycle, WeeklyProgram};
pub use delivery::{DeliverySink, EmailSink, TodoistSink};
pub use dispatch::{dispatch, Outcome};
pub use config::Config;
