//! Catalog services: translate request payloads into [`ListFilter`]s, call
//! the repository and wrap the result in a response envelope.
//!
//! [`ListFilter`]: paddock_core::filter::ListFilter

pub mod racing;
pub mod sports;

pub use racing::RacingService;
pub use sports::SportsService;
