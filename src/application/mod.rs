pub mod services;

pub use services::{CarService, GarageService, MaintenanceService};
