use crate::model::booking::BookingResponse;
use kernel::model::dashboard::DashboardSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub counts: DashboardCounts,
    pub recent_bookings: Vec<BookingResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub users: i64,
    pub resources: i64,
    pub bookings: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(value: DashboardSummary) -> Self {
        let DashboardSummary {
            users,
            resources,
            bookings,
            pending,
            approved,
            rejected,
            recent_bookings,
        } = value;
        Self {
            counts: DashboardCounts {
                users,
                resources,
                bookings,
                pending,
                approved,
                rejected,
            },
            recent_bookings: recent_bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect(),
        }
    }
}
