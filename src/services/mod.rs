//! Service layer for business logic
//!
//! This module provides the link service shared by all HTTP handlers.

mod link_service;

pub use link_service::*;
