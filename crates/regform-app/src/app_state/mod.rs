//! Top-level driver state.
//!
//! Wires one form store, the profile and cover preview pipelines, the
//! banner's cover watcher, the event bus, and the acknowledgment queue,
//! and feeds them one command per input line.

mod command;
mod core;
mod dispatch;
mod polling;
mod render;
mod submission;

#[cfg(test)]
mod tests;

pub use self::core::RegistrationApp;
