//! Long-running background tasks spawned from `main`.

pub mod messaging_refresh;
