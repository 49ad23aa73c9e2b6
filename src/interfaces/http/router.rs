//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, EmptyData};
use crate::interfaces::http::middleware::{auth_middleware, hotel_owner_middleware, AuthState};
use crate::interfaces::http::modules::{health, reservations};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Reservations
        reservations::handlers::list_by_hotel,
        reservations::handlers::list_my_reservations,
        reservations::handlers::get_reservation,
        reservations::handlers::create_reservation,
        reservations::handlers::update_reservation,
        reservations::handlers::delete_reservation,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            EmptyData,
            // Reservations
            reservations::dto::ReservationDto,
            reservations::dto::ReservationInput,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Reservations", description = "Hotel room reservation management"),
    ),
    info(
        title = "Hotel Booking API",
        version = "1.0.0",
        description = "REST API for managing hotel-room reservations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let reservation_state = reservations::ReservationAppState { repos };

    // Hotel-owner routes: role guard runs after authentication
    let owner_routes = Router::new()
        .route("/", get(reservations::handlers::list_by_hotel))
        .route(
            "/confirmation/{id}",
            put(reservations::handlers::update_reservation),
        )
        .route(
            "/delete/{id}",
            delete(reservations::handlers::delete_reservation),
        )
        .layer(middleware::from_fn(hotel_owner_middleware))
        .with_state(reservation_state.clone());

    // Routes open to any authenticated caller
    let guest_routes = Router::new()
        .route(
            "/myreservations",
            get(reservations::handlers::list_my_reservations),
        )
        .route(
            "/reservation/{id}",
            get(reservations::handlers::get_reservation),
        )
        .route("/create", post(reservations::handlers::create_reservation))
        .with_state(reservation_state);

    let reservation_routes =
        owner_routes
            .merge(guest_routes)
            .layer(middleware::from_fn_with_state(
                auth_state,
                auth_middleware,
            ));

    // Health (public)
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Reservations
        .nest("/api/hotel/room/reservations", reservation_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
