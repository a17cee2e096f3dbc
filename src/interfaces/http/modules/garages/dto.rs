//! Garage DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Garage, GarageDraft};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GarageResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub city: String,
    /// Maximum maintenances per day
    pub capacity: i32,
}

impl From<Garage> for GarageResponse {
    fn from(g: Garage) -> Self {
        Self {
            id: g.id,
            name: g.name,
            location: g.location,
            city: g.city,
            capacity: g.capacity,
        }
    }
}

/// Body of both `POST /garages` and `PUT /garages/{id}`. Missing fields are
/// reported by the service.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GarageRequest {
    #[validate(length(max = 255, message = "name is too long"))]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "location is too long"))]
    pub location: Option<String>,
    #[validate(length(max = 255, message = "city is too long"))]
    pub city: Option<String>,
    pub capacity: Option<i32>,
}

impl From<GarageRequest> for GarageDraft {
    fn from(r: GarageRequest) -> Self {
        Self {
            name: r.name,
            location: r.location,
            city: r.city,
            capacity: r.capacity,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GarageQuery {
    /// Case-insensitive substring of the city
    pub city: Option<String>,
}
