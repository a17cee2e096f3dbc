//! Database entities module

pub mod car;
pub mod car_garage;
pub mod garage;
pub mod maintenance;

pub use car::Entity as Car;
pub use car_garage::Entity as CarGarage;
pub use garage::Entity as Garage;
pub use maintenance::Entity as Maintenance;
