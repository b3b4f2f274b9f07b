//! Runtime orchestration
//!
//! Startup preparation and the HTTP server loop.

pub mod server;
pub mod startup;

pub use server::run_server;
