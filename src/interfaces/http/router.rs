//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::cars::{self, CarState};
use super::modules::garages::{self, GarageState};
use super::modules::health::{self, HealthState};
use super::modules::maintenances::{self, MaintenanceState};
use super::modules::metrics::{self, http_metrics_middleware, MetricsState};
use super::modules::request_id::request_id_middleware;
use crate::application::{CarService, GarageService, MaintenanceService};

/// The application services the REST API delegates to.
#[derive(Clone)]
pub struct ApiServices {
    pub garages: Arc<GarageService>,
    pub cars: Arc<CarService>,
    pub maintenances: Arc<MaintenanceService>,
}

// Each handler keeps its own narrow State<T>; axum derives it via FromRef.

impl FromRef<ApiServices> for GarageState {
    fn from_ref(s: &ApiServices) -> Self {
        GarageState {
            service: Arc::clone(&s.garages),
        }
    }
}

impl FromRef<ApiServices> for CarState {
    fn from_ref(s: &ApiServices) -> Self {
        CarState {
            service: Arc::clone(&s.cars),
        }
    }
}

impl FromRef<ApiServices> for MaintenanceState {
    fn from_ref(s: &ApiServices) -> Self {
        MaintenanceState {
            service: Arc::clone(&s.maintenances),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        garages::list_garages,
        garages::get_garage,
        garages::create_garage,
        garages::update_garage,
        garages::delete_garage,
        cars::list_cars,
        cars::get_car,
        cars::create_car,
        cars::update_car,
        cars::delete_car,
        maintenances::list_maintenances,
        maintenances::monthly_report,
        maintenances::get_maintenance,
        maintenances::create_maintenance,
        maintenances::update_maintenance,
        maintenances::delete_maintenance,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            garages::GarageResponse,
            garages::GarageRequest,
            cars::CarResponse,
            cars::CarRequest,
            maintenances::MaintenanceResponse,
            maintenances::MaintenanceRequest,
            maintenances::MonthlyRequestsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Garages", description = "Garage records and city search"),
        (name = "Cars", description = "Car records and their garage registrations"),
        (name = "Maintenances", description = "Maintenance appointments and the monthly request report"),
    ),
    info(
        title = "Car Garage Service API",
        version = "1.0.0",
        description = "REST API for cars, garages and maintenance appointments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    services: ApiServices,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let garage_routes = Router::new()
        .route("/", get(garages::list_garages).post(garages::create_garage))
        .route(
            "/{id}",
            get(garages::get_garage)
                .put(garages::update_garage)
                .delete(garages::delete_garage),
        );

    let car_routes = Router::new()
        .route("/", get(cars::list_cars).post(cars::create_car))
        .route(
            "/{id}",
            get(cars::get_car).put(cars::update_car).delete(cars::delete_car),
        );

    let maintenance_routes = Router::new()
        .route(
            "/",
            get(maintenances::list_maintenances).post(maintenances::create_maintenance),
        )
        .route("/report", get(maintenances::monthly_report))
        .route(
            "/{id}",
            get(maintenances::get_maintenance)
                .put(maintenances::update_maintenance)
                .delete(maintenances::delete_maintenance),
        );

    let api_routes = Router::new()
        .nest("/garages", garage_routes)
        .nest("/cars", car_routes)
        .nest("/maintenances", maintenance_routes)
        .with_state(services);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
