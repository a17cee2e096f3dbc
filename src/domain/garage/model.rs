//! Garage domain entity

use crate::domain::{DomainError, DomainResult};

/// A garage that cars are registered with and maintenances are booked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garage {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub city: String,
    /// Maximum number of maintenances per day. Informational only.
    pub capacity: i32,
}

/// Fully specified garage fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGarage {
    pub name: String,
    pub location: String,
    pub city: String,
    pub capacity: i32,
}

/// Garage fields as supplied by a caller. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct GarageDraft {
    pub name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
}

impl GarageDraft {
    /// All-or-nothing conversion: `None` if any field is missing.
    pub fn complete(self) -> Option<NewGarage> {
        Some(NewGarage {
            name: self.name?,
            location: self.location?,
            city: self.city?,
            capacity: self.capacity?,
        })
    }

    /// Checks each field in turn and reports the first one missing.
    pub fn require_each(self) -> DomainResult<NewGarage> {
        let name = self
            .name
            .ok_or_else(|| DomainError::bad_request("Name is required."))?;
        let city = self
            .city
            .ok_or_else(|| DomainError::bad_request("City is required."))?;
        let capacity = self
            .capacity
            .ok_or_else(|| DomainError::bad_request("Capacity is required."))?;
        let location = self
            .location
            .ok_or_else(|| DomainError::bad_request("Location is required."))?;

        Ok(NewGarage {
            name,
            location,
            city,
            capacity,
        })
    }
}
