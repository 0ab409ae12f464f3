use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{booking::Booking, dashboard::DashboardSummary};
use kernel::repository::dashboard::DashboardRepository;
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
struct CountsRow {
    users: i64,
    resources: i64,
    bookings: i64,
    pending: i64,
    approved: i64,
    rejected: i64,
}

#[derive(new)]
pub struct DashboardRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl DashboardRepository for DashboardRepositoryImpl {
    async fn summary(&self) -> AppResult<DashboardSummary> {
        let counts: CountsRow = sqlx::query_as(
            r#"
                SELECT
                    (SELECT COUNT(*) FROM users) AS users,
                    (SELECT COUNT(*) FROM resources) AS resources,
                    COUNT(*) AS bookings,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                    COUNT(*) FILTER (WHERE status = 'approved') AS approved,
                    COUNT(*) FILTER (WHERE status = 'rejected') AS rejected
                FROM bookings
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let recent: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.booking_id,
                    b.user_id,
                    u.user_name,
                    u.email,
                    b.resource_id,
                    r.resource_name,
                    r.resource_type,
                    r.location,
                    b.purpose,
                    b.booked_date,
                    b.start_time,
                    b.end_time,
                    b.status
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN resources AS r ON b.resource_id = r.resource_id
                ORDER BY b.created_at DESC
                LIMIT 10
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let recent_bookings = recent
            .into_iter()
            .map(Booking::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DashboardSummary {
            users: counts.users,
            resources: counts.resources,
            bookings: counts.bookings,
            pending: counts.pending,
            approved: counts.approved,
            rejected: counts.rejected,
            recent_bookings,
        })
    }
}
