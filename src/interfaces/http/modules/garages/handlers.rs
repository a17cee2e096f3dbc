//! Garage REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{GarageQuery, GarageRequest, GarageResponse};
use crate::application::GarageService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiPath, ApiQuery, ApiResponse, ApiResult, ValidatedJson,
};

#[derive(Clone)]
pub struct GarageState {
    pub service: Arc<GarageService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/garages",
    tag = "Garages",
    params(GarageQuery),
    responses(
        (status = 200, description = "Garage list", body = ApiResponse<Vec<GarageResponse>>)
    )
)]
pub async fn list_garages(
    State(state): State<GarageState>,
    ApiQuery(query): ApiQuery<GarageQuery>,
) -> ApiResult<Vec<GarageResponse>> {
    let garages = state
        .service
        .get_garages(query.city.as_deref())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        garages.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/garages/{id}",
    tag = "Garages",
    params(("id" = i32, Path, description = "Garage ID")),
    responses(
        (status = 200, description = "Garage details", body = ApiResponse<GarageResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_garage(
    State(state): State<GarageState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<GarageResponse> {
    let garage = state
        .service
        .get_garage_by_id(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(garage.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/garages",
    tag = "Garages",
    request_body = GarageRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<GarageResponse>),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_garage(
    State(state): State<GarageState>,
    ValidatedJson(req): ValidatedJson<GarageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GarageResponse>>), ApiError> {
    let garage = state
        .service
        .create_garage(req.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(garage.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/garages/{id}",
    tag = "Garages",
    params(("id" = i32, Path, description = "Garage ID")),
    request_body = GarageRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<GarageResponse>),
        (status = 400, description = "Missing field"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_garage(
    State(state): State<GarageState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(req): ValidatedJson<GarageRequest>,
) -> ApiResult<GarageResponse> {
    let garage = state
        .service
        .update_garage(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(garage.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/garages/{id}",
    tag = "Garages",
    params(("id" = i32, Path, description = "Garage ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Garage still has maintenances"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_garage(
    State(state): State<GarageState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_garage(id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
