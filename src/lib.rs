//! Aigis hub firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod alarm;
pub mod assets;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod link;
pub mod peers;
pub mod pins;

// The concrete implementations are guarded by cfg attributes inside.
pub mod adapters;

mod esp_link_shims;
