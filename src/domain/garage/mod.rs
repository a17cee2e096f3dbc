//! Garage aggregate

pub mod model;
pub mod repository;

pub use model::{Garage, GarageDraft, NewGarage};
pub use repository::GarageRepository;
