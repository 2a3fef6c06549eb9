//! Data access layer for ComplianceHub.
//!
//! Every collection lives behind a repository trait so the in-memory
//! store used today can be swapped for a real backend without touching
//! the HTTP layer. Stores are constructed per instance (and per test)
//! from explicit seed data; there is no process-wide singleton.

pub mod error;
pub mod favorites;
pub mod repositories;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use favorites::FavoriteStore;
