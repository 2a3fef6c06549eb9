//! Request handlers, one module per resource.

pub mod favorites;
pub mod messaging;
pub mod requests;
pub mod services;
pub mod stats;
