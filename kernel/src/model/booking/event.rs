use crate::model::{
    booking::BookingStatus,
    id::{BookingId, ResourceId, UserId},
};
use derive_new::new;

/// A candidate booking as submitted by a user.
#[derive(Debug, Clone, new)]
pub struct CreateBooking {
    pub resource_id: ResourceId,
    pub booked_by: UserId,
    pub purpose: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, new)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
    pub requested_user: UserId,
}
