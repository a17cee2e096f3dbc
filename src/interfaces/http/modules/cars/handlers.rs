//! Car REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CarRequest, CarResponse};
use crate::application::CarService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiPath, ApiResponse, ApiResult, ValidatedJson,
};

#[derive(Clone)]
pub struct CarState {
    pub service: Arc<CarService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/cars",
    tag = "Cars",
    responses(
        (status = 200, description = "Car list", body = ApiResponse<Vec<CarResponse>>)
    )
)]
pub async fn list_cars(State(state): State<CarState>) -> ApiResult<Vec<CarResponse>> {
    let cars = state.service.get_cars().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        cars.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/cars/{id}",
    tag = "Cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "Car details", body = ApiResponse<CarResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_car(
    State(state): State<CarState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<CarResponse> {
    let car = state.service.get_car_by_id(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(car.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/cars",
    tag = "Cars",
    request_body = CarRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<CarResponse>),
        (status = 400, description = "Missing field or unknown garage")
    )
)]
pub async fn create_car(
    State(state): State<CarState>,
    ValidatedJson(req): ValidatedJson<CarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CarResponse>>), ApiError> {
    let car = state
        .service
        .create_car(req.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(car.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/cars/{id}",
    tag = "Cars",
    params(("id" = i32, Path, description = "Car ID")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CarResponse>),
        (status = 400, description = "Missing field or unknown garage"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_car(
    State(state): State<CarState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(req): ValidatedJson<CarRequest>,
) -> ApiResult<CarResponse> {
    let car = state
        .service
        .update_car(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(car.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cars/{id}",
    tag = "Cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Car still has maintenances"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_car(
    State(state): State<CarState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_car(id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
