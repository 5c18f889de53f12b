//! Core types and definitions for the LAGSHOT engagement simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, state snapshots, events, errors
//! and the kinematic history log. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod history;
pub mod state;
pub mod types;

pub use config::SimConfig;
pub use error::SimError;

#[cfg(test)]
mod tests;
