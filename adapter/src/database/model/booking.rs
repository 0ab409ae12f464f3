use kernel::model::{
    booking::{Booking, BookingResource, BookingSlot, BookingStatus},
    id::{BookingId, ResourceId, UserId},
    user::BookingOwner,
};
use shared::error::AppError;
use std::str::FromStr;

/// A booking joined with its owner and resource.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub resource_type: String,
    pub location: String,
    pub purpose: Option<String>,
    pub booked_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            user_id,
            user_name,
            email,
            resource_id,
            resource_name,
            resource_type,
            location,
            purpose,
            booked_date,
            start_time,
            end_time,
            status,
        } = value;
        let status = parse_status(&status)?;
        Ok(Booking {
            booking_id,
            booked_by: BookingOwner {
                user_id,
                user_name,
                email,
            },
            resource: BookingResource {
                resource_id,
                name: resource_name,
                resource_type,
                location,
            },
            purpose,
            date: booked_date,
            start_time,
            end_time,
            status,
        })
    }
}

/// The narrow projection the admission check reads inside its transaction.
#[derive(sqlx::FromRow)]
pub struct BookingSlotRow {
    pub booked_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

impl TryFrom<BookingSlotRow> for BookingSlot {
    type Error = AppError;

    fn try_from(value: BookingSlotRow) -> Result<Self, Self::Error> {
        let BookingSlotRow {
            booked_date,
            start_time,
            end_time,
            status,
        } = value;
        Ok(BookingSlot {
            date: booked_date,
            start_time,
            end_time,
            status: parse_status(&status)?,
        })
    }
}

fn parse_status(status: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_str(status)
        .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {status}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> BookingRow {
        BookingRow {
            booking_id: BookingId::new(),
            user_id: UserId::new(),
            user_name: "Bob Student".into(),
            email: "bob@student.edu".into(),
            resource_id: ResourceId::new(),
            resource_name: "Sports Field".into(),
            resource_type: "sports".into(),
            location: "Grounds".into(),
            purpose: Some("Football practice".into()),
            booked_date: "2025-03-10".into(),
            start_time: "16:00".into(),
            end_time: "18:00".into(),
            status: status.into(),
        }
    }

    #[test]
    fn row_converts_with_known_status() {
        let booking = Booking::try_from(row("approved")).unwrap();
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.resource.name, "Sports Field");
    }

    #[test]
    fn row_with_unknown_status_fails_conversion() {
        assert!(Booking::try_from(row("cancelled")).is_err());
    }
}
