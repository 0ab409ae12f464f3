use crate::database::{
    model::booking::{BookingRow, BookingSlotRow},
    model::resource::ResourceRow,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        admission,
        event::{CreateBooking, UpdateBookingStatus},
        Booking, BookingSlot,
    },
    id::{BookingId, UserId},
    resource::Resource,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

const BOOKING_COLUMNS: &str = r#"
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
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The admission read and the insert must commit as one unit, or two
        // concurrent requests could both pass the check. SERIALIZABLE makes
        // the loser of that race fail to commit instead.
        self.set_transaction_serializable(&mut tx).await?;

        let resource: Option<ResourceRow> = sqlx::query_as(
            r#"
                SELECT
                    resource_id, resource_name, resource_type, capacity,
                    location, available_from, available_to, description
                FROM resources
                WHERE resource_id = $1
            "#,
        )
        .bind(event.resource_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(resource) = resource else {
            return Err(AppError::EntityNotFound(format!(
                "resource {} not found",
                event.resource_id
            )));
        };
        let resource = Resource::from(resource);

        // Rejected bookings are excluded here and skipped again inside the
        // checker; rejection frees the slot immediately.
        let slots: Vec<BookingSlotRow> = sqlx::query_as(
            r#"
                SELECT booked_date, start_time, end_time, status
                FROM bookings
                WHERE resource_id = $1
                  AND booked_date = $2
                  AND status <> 'rejected'
            "#,
        )
        .bind(event.resource_id)
        .bind(&event.date)
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let existing = slots
            .into_iter()
            .map(BookingSlot::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let draft = admission::evaluate(&event, &resource, &existing)
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                    (booking_id, user_id, resource_id, purpose,
                     booked_date, start_time, end_time, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(booking_id)
        .bind(draft.candidate.booked_by)
        .bind(draft.candidate.resource_id)
        .bind(&draft.candidate.purpose)
        .bind(&draft.candidate.date)
        .bind(&draft.candidate.start_time)
        .bind(&draft.candidate.end_time)
        .bind(draft.status.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN resources AS r ON b.resource_id = r.resource_id
                ORDER BY b.booked_date DESC, b.start_time ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN resources AS r ON b.resource_id = r.resource_id
                WHERE b.user_id = $1
                ORDER BY b.booked_date DESC, b.start_time ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        let row: Option<BookingRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOOKING_COLUMNS}
                FROM bookings AS b
                INNER JOIN users AS u ON b.user_id = u.user_id
                INNER JOIN resources AS r ON b.resource_id = r.resource_id
                WHERE b.booking_id = $1
            "#
        ))
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Booking::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "booking {booking_id} not found"
            ))),
        }
    }

    async fn update_status(&self, event: UpdateBookingStatus) -> AppResult<Booking> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $1, updated_at = CURRENT_TIMESTAMP
                WHERE booking_id = $2
            "#,
        )
        .bind(event.status.as_ref())
        .bind(event.booking_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        }

        self.find_by_id(event.booking_id).await
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
