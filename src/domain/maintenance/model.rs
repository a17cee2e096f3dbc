//! Maintenance domain entity

use chrono::NaiveDate;

use crate::domain::{DomainError, DomainResult};

/// A scheduled maintenance, with the display names of its car and garage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maintenance {
    pub id: i32,
    pub service_type: String,
    pub scheduled_date: NaiveDate,
    pub car_id: i32,
    pub garage_id: i32,
    /// The car's make; `None` when the car row could not be loaded.
    pub car_name: Option<String>,
    /// `None` when the garage row could not be loaded.
    pub garage_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaintenance {
    pub service_type: String,
    pub scheduled_date: NaiveDate,
    pub car_id: i32,
    pub garage_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceDraft {
    pub car_id: Option<i32>,
    pub garage_id: Option<i32>,
    pub service_type: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
}

impl MaintenanceDraft {
    pub fn complete(self) -> DomainResult<NewMaintenance> {
        match (self.car_id, self.garage_id, self.service_type, self.scheduled_date) {
            (Some(car_id), Some(garage_id), Some(service_type), Some(scheduled_date)) => {
                Ok(NewMaintenance {
                    service_type,
                    scheduled_date,
                    car_id,
                    garage_id,
                })
            }
            _ => Err(DomainError::bad_request("Bad request!")),
        }
    }
}

/// Optional filters for listing maintenances. Every filter that is set must
/// match; date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    pub car_id: Option<i32>,
    pub garage_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
