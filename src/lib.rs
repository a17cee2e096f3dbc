//! # Car Garage Service
//!
//! CRUD backend for cars, garages and maintenance appointments, with a
//! monthly request report per garage.
//!
//! ## Architecture
//!
//! - **domain**: entities, draft/strict input types, repository and
//!   unit-of-work traits, month arithmetic for the report
//! - **application**: one service per aggregate, each call running in its
//!   own unit of work
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: error type and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

#[cfg(test)]
mod test_support;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
