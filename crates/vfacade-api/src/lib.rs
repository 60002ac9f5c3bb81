//! vfacade-api - REST API layer for the vehicle facade
//!
//! Maps the public routes onto [`VehicleFacade::dispatch`] and renders its
//! outcome as JSON. No translation logic lives here.
//!
//! # Usage
//!
//! ```ignore
//! use vfacade_api::{create_router, AppState};
//! use vfacade_proxy::{FacadeTables, VehicleFacade};
//!
//! let facade = VehicleFacade::new(Arc::new(UpstreamClient::new()?), tables);
//! let router = create_router(AppState::new(facade));
//! ```
//!
//! [`VehicleFacade::dispatch`]: vfacade_proxy::VehicleFacade::dispatch

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::fallback::{method_not_allowed, no_route};
use handlers::vehicles;

/// Create the facade REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        .route(
            "/vehicles/{vehicle_id}",
            get(vehicles::get_vehicle).fallback(method_not_allowed),
        )
        .route(
            "/vehicles/{vehicle_id}/{resource}",
            get(vehicles::get_resource)
                .post(vehicles::post_resource)
                .fallback(method_not_allowed),
        )
        .fallback(no_route)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
