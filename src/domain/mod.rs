//! Domain layer: entities, repository traits and report logic

pub mod car;
pub mod garage;
pub mod maintenance;
pub mod repositories;

// Re-export commonly used types
pub use car::{Car, CarDraft, CarRepository, NewCar};
pub use garage::{Garage, GarageDraft, GarageRepository, NewGarage};
pub use maintenance::{
    monthly_counts, Maintenance, MaintenanceDraft, MaintenanceFilter, MaintenanceRepository,
    MonthlyRequests, NewMaintenance, YearMonth,
};
pub use repositories::{UnitOfWork, UnitOfWorkFactory};

pub use crate::shared::errors::{DomainError, DomainResult};
