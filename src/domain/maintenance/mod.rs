//! Maintenance aggregate
//!
//! Contains the Maintenance entity, list filters, the repository interface
//! and the monthly request report.

pub mod model;
pub mod report;
pub mod repository;

pub use model::{Maintenance, MaintenanceDraft, MaintenanceFilter, NewMaintenance};
pub use report::{monthly_counts, MonthlyRequests, YearMonth};
pub use repository::MaintenanceRepository;
