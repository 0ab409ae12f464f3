use crate::model::booking::Booking;

/// Admin dashboard aggregation: flat counts plus the latest bookings.
#[derive(Debug)]
pub struct DashboardSummary {
    pub users: i64,
    pub resources: i64,
    pub bookings: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub recent_bookings: Vec<Booking>,
}
