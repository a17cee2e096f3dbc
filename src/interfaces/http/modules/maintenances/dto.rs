//! Maintenance DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Maintenance, MaintenanceDraft, MaintenanceFilter, MonthlyRequests};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceResponse {
    pub id: i32,
    pub car_id: i32,
    /// Make of the car, `null` if the car could not be loaded
    pub car_name: Option<String>,
    pub service_type: String,
    #[schema(value_type = String, format = Date, example = "2024-02-15")]
    pub scheduled_date: NaiveDate,
    pub garage_id: i32,
    pub garage_name: Option<String>,
}

impl From<Maintenance> for MaintenanceResponse {
    fn from(m: Maintenance) -> Self {
        Self {
            id: m.id,
            car_id: m.car_id,
            car_name: m.car_name,
            service_type: m.service_type,
            scheduled_date: m.scheduled_date,
            garage_id: m.garage_id,
            garage_name: m.garage_name,
        }
    }
}

/// Body of both `POST /maintenances` and `PUT /maintenances/{id}`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct MaintenanceRequest {
    pub car_id: Option<i32>,
    pub garage_id: Option<i32>,
    #[validate(length(max = 255, message = "service_type is too long"))]
    pub service_type: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2024-02-15")]
    pub scheduled_date: Option<NaiveDate>,
}

impl From<MaintenanceRequest> for MaintenanceDraft {
    fn from(r: MaintenanceRequest) -> Self {
        Self {
            car_id: r.car_id,
            garage_id: r.garage_id,
            service_type: r.service_type,
            scheduled_date: r.scheduled_date,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MaintenanceQuery {
    pub car_id: Option<i32>,
    pub garage_id: Option<i32>,
    /// Earliest scheduled date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
    /// Latest scheduled date, inclusive (YYYY-MM-DD)
    #[param(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
}

impl From<MaintenanceQuery> for MaintenanceFilter {
    fn from(q: MaintenanceQuery) -> Self {
        Self {
            car_id: q.car_id,
            garage_id: q.garage_id,
            start_date: q.start_date,
            end_date: q.end_date,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    pub garage_id: Option<i32>,
    /// First month of the report (YYYY-MM)
    pub start_month: Option<String>,
    /// Last month of the report, inclusive (YYYY-MM)
    pub end_month: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyRequestsResponse {
    /// Zero-padded `YYYY-MM`
    #[schema(example = "2024-02")]
    pub year_month: String,
    pub requests: u64,
}

impl From<MonthlyRequests> for MonthlyRequestsResponse {
    fn from(r: MonthlyRequests) -> Self {
        Self {
            year_month: r.year_month.to_string(),
            requests: r.requests,
        }
    }
}
