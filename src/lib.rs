//! Poppins - a service desk terminal client.
//!
//! This crate renders a helpdesk front-end in the terminal: a dashboard with
//! tickets, tasks and inventory, a ticket detail view, a knowledge base, an
//! out-of-office request form, plus login and department selection screens.
//! All displayed records are immutable sample data; screen behavior is built
//! on a small state model of view selections and transient overlays with
//! outside-press dismissal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing entity definitions and sample records.
pub mod domain;
/// Infrastructure layer containing configuration adapters.
pub mod infrastructure;
/// Presentation layer containing UI state, screens and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "poppins";
