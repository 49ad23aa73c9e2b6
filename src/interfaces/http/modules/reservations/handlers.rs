//! Reservation HTTP handlers
//!
//! Six operations over the reservations table. Listing by hotel, update
//! and delete require the hotel-owner role (enforced by the router);
//! the identity-scoped operations resolve the caller via the email claim.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::RepositoryProvider;
use crate::domain::{DomainError, User};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedForm};
use crate::interfaces::http::middleware::AuthenticatedUser;

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Query parameters for the hotel listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct HotelListingParams {
    /// Hotel to list reservations for
    #[serde(rename = "hotelId")]
    pub hotel_id: i32,
}

/// Resolve the caller's email claim to a user record.
///
/// Callers without an email claim, and claims no user record matches,
/// both answer 400 with the historical message.
async fn resolve_caller<T>(
    state: &ReservationAppState,
    user: &AuthenticatedUser,
) -> Result<User, (StatusCode, Json<ApiResponse<T>>)> {
    let Some(email) = user.email.as_deref() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("You are not logged in")),
        ));
    };

    let resolved = state.repos.users().find_by_email(email).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    resolved.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("You are not logged in")),
        )
    })
}

#[utoipa::path(
    get,
    path = "/api/hotel/room/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(HotelListingParams),
    responses(
        (status = 200, description = "Active reservations for the hotel", body = ApiResponse<Vec<ReservationDto>>),
        (status = 403, description = "Caller is not a hotel owner")
    )
)]
pub async fn list_by_hotel(
    State(state): State<ReservationAppState>,
    Query(params): Query<HotelListingParams>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repos
        .reservations()
        .list_active_for_hotel(params.hotel_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/hotel/room/reservations/myreservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All of the caller's reservations, canceled included", body = ApiResponse<Vec<ReservationDto>>),
        (status = 400, description = "No email claim on the request")
    )
)]
pub async fn list_my_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let caller = resolve_caller(&state, &user).await?;

    let reservations = state
        .repos
        .reservations()
        .list_for_user(&caller.id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/hotel/room/reservations/reservation/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let Some(r) = reservation else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Reservation {} not found", id))),
        ));
    };

    Ok(Json(ApiResponse::success(ReservationDto::from(r))))
}

#[utoipa::path(
    post,
    path = "/api/hotel/room/reservations/create",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body(content = ReservationInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 204, description = "Reservation created"),
        (status = 400, description = "No email claim on the request")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedForm(input): ValidatedForm<ReservationInput>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    let caller = resolve_caller(&state, &user).await?;

    state
        .repos
        .reservations()
        .create(input.into_new_reservation(caller.id))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/hotel/room/reservations/confirmation/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body(content = ReservationInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 204, description = "Reservation updated"),
        (status = 403, description = "Caller is not a hotel owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
    ValidatedForm(input): ValidatedForm<ReservationInput>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    let existing = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    let Some(mut reservation) = existing else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Reservation {} not found", id))),
        ));
    };

    input.apply_to(&mut reservation);

    state
        .repos
        .reservations()
        .update(reservation)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            )
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/hotel/room/reservations/delete/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 403, description = "Caller is not a hotel owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<EmptyData>>)> {
    state
        .repos
        .reservations()
        .delete(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Reservation {} not found", id))),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(other.to_string())),
            ),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

// ── Tests ──────────────────────────────────────────────────────
