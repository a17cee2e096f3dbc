//! Maintenance REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{
    MaintenanceQuery, MaintenanceRequest, MaintenanceResponse, MonthlyRequestsResponse,
    ReportQuery,
};
use crate::application::MaintenanceService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiPath, ApiQuery, ApiResponse, ApiResult, ValidatedJson,
};

#[derive(Clone)]
pub struct MaintenanceState {
    pub service: Arc<MaintenanceService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenances",
    tag = "Maintenances",
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Matching maintenances", body = ApiResponse<Vec<MaintenanceResponse>>),
        (status = 404, description = "Nothing matched")
    )
)]
pub async fn list_maintenances(
    State(state): State<MaintenanceState>,
    ApiQuery(query): ApiQuery<MaintenanceQuery>,
) -> ApiResult<Vec<MaintenanceResponse>> {
    let maintenances = state
        .service
        .get_maintenances(&query.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        maintenances.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenances/{id}",
    tag = "Maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 200, description = "Maintenance details", body = ApiResponse<MaintenanceResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_maintenance(
    State(state): State<MaintenanceState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<MaintenanceResponse> {
    let maintenance = state
        .service
        .get_maintenance_by_id(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(maintenance.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenances",
    tag = "Maintenances",
    request_body = MaintenanceRequest,
    responses(
        (status = 201, description = "Scheduled", body = ApiResponse<MaintenanceResponse>),
        (status = 400, description = "Missing field or unknown car/garage")
    )
)]
pub async fn create_maintenance(
    State(state): State<MaintenanceState>,
    ValidatedJson(req): ValidatedJson<MaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceResponse>>), ApiError> {
    let maintenance = state
        .service
        .create_maintenance(req.into())
        .await
        .map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(maintenance.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/maintenances/{id}",
    tag = "Maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    request_body = MaintenanceRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<MaintenanceResponse>),
        (status = 400, description = "Missing field or unknown car/garage"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_maintenance(
    State(state): State<MaintenanceState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(req): ValidatedJson<MaintenanceRequest>,
) -> ApiResult<MaintenanceResponse> {
    let maintenance = state
        .service
        .update_maintenance(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(maintenance.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maintenances/{id}",
    tag = "Maintenances",
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_maintenance(
    State(state): State<MaintenanceState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_maintenance(id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenances/report",
    tag = "Maintenances",
    params(ReportQuery),
    responses(
        (status = 200, description = "One entry per month in range", body = ApiResponse<Vec<MonthlyRequestsResponse>>),
        (status = 400, description = "Missing or malformed parameter, or inverted range")
    )
)]
pub async fn monthly_report(
    State(state): State<MaintenanceState>,
    ApiQuery(query): ApiQuery<ReportQuery>,
) -> ApiResult<Vec<MonthlyRequestsResponse>> {
    let report = state
        .service
        .get_monthly_report(
            query.garage_id,
            query.start_month.as_deref(),
            query.end_month.as_deref(),
        )
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        report.into_iter().map(Into::into).collect(),
    )))
}
