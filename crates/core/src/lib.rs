//! Pure domain logic shared by the catalog repositories and the HTTP layer.
//!
//! Nothing in here touches the database or the network, so every module can
//! be unit tested in isolation.

pub mod clock;
pub mod error;
pub mod filter;
pub mod status;
pub mod types;
