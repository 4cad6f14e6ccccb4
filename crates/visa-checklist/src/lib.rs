//! Checklist-to-document reconciliation for visa application processing.
//!
//! The [`checklist`] module holds the matching engine. [`config`], [`error`] and
//! [`telemetry`] carry the ambient plumbing used by the command-line front end.

pub mod checklist;
pub mod config;
pub mod error;
pub mod telemetry;
