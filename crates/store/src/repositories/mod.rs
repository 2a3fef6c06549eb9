//! Repository layer.
//!
//! Each entity gets a trait describing its CRUD surface and an in-memory
//! implementation holding the collection behind a `tokio::sync::RwLock`.
//! Identity assignment follows the catalog convention: one past the
//! current maximum id.

pub mod message_repo;
pub mod request_repo;
pub mod service_repo;
pub mod user_repo;

pub use message_repo::{InMemoryMessages, MessageRepo};
pub use request_repo::{InMemoryRequests, RequestRepo};
pub use service_repo::{InMemoryServices, ServiceRepo};
pub use user_repo::{InMemoryUsers, UserRepo};
