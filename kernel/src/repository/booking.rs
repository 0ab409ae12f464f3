use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingStatus},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Run the admission check and persist the booking atomically.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    /// All bookings, enriched with owner and resource, newest date first.
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    /// One user's bookings, same enrichment and order.
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking>;
    /// Overwrite the stored status; prior status is deliberately not
    /// validated. Returns the updated, enriched booking.
    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<Booking>;
}
