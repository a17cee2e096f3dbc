//! Car aggregate
//!
//! Cars are linked to garages many-to-many and own their maintenances.

pub mod model;
pub mod repository;

pub use model::{Car, CarDraft, NewCar};
pub use repository::CarRepository;
