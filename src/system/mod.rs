//! System-level modules
//!
//! System-level functionality kept apart from the request path.
//! Today that is only logging initialization.

pub mod logging;
