//! Car domain entity

use crate::domain::garage::Garage;
use crate::domain::{DomainError, DomainResult};

/// A car together with the garages it is registered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub licence_plate: String,
    /// Ordered by garage id.
    pub garages: Vec<Garage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub licence_plate: String,
}

/// Car fields as supplied by a caller.
///
/// `garage_ids: None` means "leave the associations alone" on update and
/// "no garages" on create.
#[derive(Debug, Clone, Default)]
pub struct CarDraft {
    pub make: Option<String>,
    pub model: Option<String>,
    pub production_year: Option<i32>,
    pub licence_plate: Option<String>,
    pub garage_ids: Option<Vec<i32>>,
}

impl CarDraft {
    /// Splits the draft into the car fields and the requested garage ids,
    /// failing with a single generic message if any car field is missing.
    pub fn complete(self) -> DomainResult<(NewCar, Option<Vec<i32>>)> {
        match (self.make, self.model, self.production_year, self.licence_plate) {
            (Some(make), Some(model), Some(production_year), Some(licence_plate)) => Ok((
                NewCar {
                    make,
                    model,
                    production_year,
                    licence_plate,
                },
                self.garage_ids.map(dedup_ids),
            )),
            _ => Err(DomainError::bad_request("Bad Request!")),
        }
    }

    /// Like [`complete`](Self::complete), but names the first missing field.
    pub fn require_each(self) -> DomainResult<(NewCar, Option<Vec<i32>>)> {
        let make = self
            .make
            .ok_or_else(|| DomainError::bad_request("Make is required."))?;
        let model = self
            .model
            .ok_or_else(|| DomainError::bad_request("Model is required."))?;
        let production_year = self
            .production_year
            .ok_or_else(|| DomainError::bad_request("Production year is required."))?;
        let licence_plate = self
            .licence_plate
            .ok_or_else(|| DomainError::bad_request("Licence plate is required."))?;

        Ok((
            NewCar {
                make,
                model,
                production_year,
                licence_plate,
            },
            self.garage_ids.map(dedup_ids),
        ))
    }
}

fn dedup_ids(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
