//! Core types and definitions for the HOLDOUT defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, constants, projection math and
//! session configuration. It has no dependency on any runtime or drawing surface.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod projection;
pub mod state;
pub mod types;
