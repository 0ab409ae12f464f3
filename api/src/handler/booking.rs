use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingResponse, BookingsResponse, CreateBookingRequest, CreateBookingRequestWithIds,
        UpdateBookingStatusRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{event::UpdateBookingStatus, BookingStatus},
    id::BookingId,
};
use kernel::notifier::StatusChangeNotice;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use std::str::FromStr;

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    // An id that is not a UUID cannot resolve to any resource.
    let resource_id = req
        .resource_id
        .parse()
        .map_err(|_| AppError::EntityNotFound(format!("resource {} not found", req.resource_id)))?;

    let event = CreateBookingRequestWithIds::new(resource_id, user.id(), req);
    let booking_id = registry.booking_repository().create(event.into()).await?;
    let booking = registry.booking_repository().find_by_id(booking_id).await?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let bookings = if user.is_admin() {
        registry.booking_repository().find_all().await?
    } else {
        registry.booking_repository().find_by_user_id(user.id()).await?
    };
    Ok(Json(bookings.into()))
}

pub async fn update_booking_status(
    user: AuthorizedUser,
    Path(booking_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<BookingResponse>> {
    let booking_id = parse_booking_id(&booking_id)?;
    let status = BookingStatus::from_str(&req.status)
        .map_err(|_| AppError::UnprocessableEntity(format!("invalid status value: {}", req.status)))?;
    transition(user, booking_id, status, registry).await
}

pub async fn approve_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking_id = parse_booking_id(&booking_id)?;
    transition(user, booking_id, BookingStatus::Approved, registry).await
}

pub async fn reject_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking_id = parse_booking_id(&booking_id)?;
    transition(user, booking_id, BookingStatus::Rejected, registry).await
}

// An id that is not a UUID cannot name any booking.
fn parse_booking_id(raw: &str) -> AppResult<BookingId> {
    BookingId::from_str(raw).map_err(|_| AppError::EntityNotFound(format!("booking {raw} not found")))
}

async fn transition(
    user: AuthorizedUser,
    booking_id: BookingId,
    status: BookingStatus,
    registry: AppRegistry,
) -> AppResult<Json<BookingResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let event = UpdateBookingStatus::new(booking_id, status, user.id());
    let booking = registry.booking_repository().update_status(event).await?;

    // Best-effort side channel: the status change already committed, so a
    // full queue only costs the owner an email.
    let notice = StatusChangeNotice::from(&booking);
    if let Err(e) = registry.status_change_sender().try_send(notice) {
        tracing::warn!(
            error.message = %e,
            booking_id = %booking_id,
            "could not enqueue status change notification"
        );
    }

    Ok(Json(booking.into()))
}
