//! Maintenance endpoints and the monthly report

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
