//! SeaORM repository implementations

mod car_repository;
mod garage_repository;
mod maintenance_repository;
mod unit_of_work;

pub use unit_of_work::{SeaOrmUnitOfWork, SeaOrmUnitOfWorkFactory};
