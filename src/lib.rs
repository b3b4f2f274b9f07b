//! Linkpress - a minimalist persistent URL shortener
//!
//! This library provides the core functionality for the Linkpress service:
//! a bidirectional short-id registry, collision-free id generation, hourly
//! admission control for link creation, and file-backed snapshots that
//! survive process restarts.
//!
//! # Architecture
//! - `store`: in-memory bidirectional link registry
//! - `ratelimit`: fixed-window admission control for creations
//! - `snapshot`: durable JSON snapshots of the registry
//! - `services`: business logic orchestrating the above
//! - `api`: HTTP services (create, redirect, health)
//! - `config`: configuration management
//! - `runtime`: application startup and the server loop
//! - `system`: logging initialization

pub mod api;
pub mod config;
pub mod errors;
pub mod ratelimit;
pub mod runtime;
pub mod services;
pub mod snapshot;
pub mod store;
pub mod system;
pub mod utils;
