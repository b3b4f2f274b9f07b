//! HTTP API layer
//!
//! Route builders and handlers for the three public surfaces: link
//! creation, redirects and the health endpoint.

pub mod services;
