//! Application services

mod car;
mod garage;
mod maintenance;

pub use car::CarService;
pub use garage::GarageService;
pub use maintenance::MaintenanceService;
