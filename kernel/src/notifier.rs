use crate::model::booking::{Booking, BookingStatus};
use async_trait::async_trait;

/// What the notifier needs to tell a booking owner about a status change.
#[derive(Debug, Clone)]
pub struct StatusChangeNotice {
    pub email: String,
    pub user_name: String,
    pub resource_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

impl From<&Booking> for StatusChangeNotice {
    fn from(booking: &Booking) -> Self {
        Self {
            email: booking.booked_by.email.clone(),
            user_name: booking.booked_by.user_name.clone(),
            resource_name: booking.resource.name.clone(),
            date: booking.date.clone(),
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
            status: booking.status,
        }
    }
}

/// Best-effort outbound side channel. Implementations must not let a
/// delivery failure escape into the booking flow; callers only log errors.
#[async_trait]
pub trait StatusNotifier: Send + Sync {
    async fn notify(&self, notice: &StatusChangeNotice) -> anyhow::Result<()>;
}
