//! Car DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Car, CarDraft};
use crate::interfaces::http::modules::garages::GarageResponse;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarResponse {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub production_year: i32,
    pub licence_plate: String,
    /// Garages the car is registered with, ordered by id
    pub garages: Vec<GarageResponse>,
}

impl From<Car> for CarResponse {
    fn from(c: Car) -> Self {
        Self {
            id: c.id,
            make: c.make,
            model: c.model,
            production_year: c.production_year,
            licence_plate: c.licence_plate,
            garages: c.garages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of both `POST /cars` and `PUT /cars/{id}`.
///
/// On update, leaving out `garage_ids` keeps the current garages while an
/// empty list removes them all.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CarRequest {
    #[validate(length(max = 255, message = "make is too long"))]
    pub make: Option<String>,
    #[validate(length(max = 255, message = "model is too long"))]
    pub model: Option<String>,
    pub production_year: Option<i32>,
    #[validate(length(max = 32, message = "licence_plate is too long"))]
    pub licence_plate: Option<String>,
    pub garage_ids: Option<Vec<i32>>,
}

impl From<CarRequest> for CarDraft {
    fn from(r: CarRequest) -> Self {
        Self {
            make: r.make,
            model: r.model,
            production_year: r.production_year,
            licence_plate: r.licence_plate,
            garage_ids: r.garage_ids,
        }
    }
}
