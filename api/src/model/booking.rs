use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus},
    id::{BookingId, ResourceId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub resource_id: String,
    #[garde(length(min = 1))]
    pub date: String,
    #[garde(length(min = 1))]
    pub start_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
    #[garde(skip)]
    pub purpose: Option<String>,
}

#[derive(new)]
pub struct CreateBookingRequestWithIds(ResourceId, UserId, CreateBookingRequest);

impl From<CreateBookingRequestWithIds> for CreateBooking {
    fn from(value: CreateBookingRequestWithIds) -> Self {
        let CreateBookingRequestWithIds(
            resource_id,
            user_id,
            CreateBookingRequest {
                resource_id: _,
                date,
                start_time,
                end_time,
                purpose,
            },
        ) = value;
        Self {
            resource_id,
            booked_by: user_id,
            purpose,
            date,
            start_time,
            end_time,
        }
    }
}

/// Target status for `PUT /bookings/:id`. Kept as a plain string so an
/// out-of-range value surfaces as the invalid-status error instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub user_name: String,
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub purpose: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            booked_by,
            resource,
            purpose,
            date,
            start_time,
            end_time,
            status,
        } = value;
        Self {
            id: booking_id,
            user_id: booked_by.user_id,
            user_name: booked_by.user_name,
            resource_id: resource.resource_id,
            resource_name: resource.name,
            purpose,
            date,
            start_time,
            end_time,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(resource_id: &str, date: &str, start: &str, end: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            resource_id: resource_id.into(),
            date: date.into(),
            start_time: start.into(),
            end_time: end.into(),
            purpose: None,
        }
    }

    #[rstest]
    #[case("", "2025-03-10", "10:00", "11:00")]
    #[case("5f6e1c9a-0000-0000-0000-000000000000", "", "10:00", "11:00")]
    #[case("5f6e1c9a-0000-0000-0000-000000000000", "2025-03-10", "", "11:00")]
    #[case("5f6e1c9a-0000-0000-0000-000000000000", "2025-03-10", "10:00", "")]
    fn create_request_requires_all_slot_fields(
        #[case] resource_id: &str,
        #[case] date: &str,
        #[case] start: &str,
        #[case] end: &str,
    ) {
        assert!(request(resource_id, date, start, end).validate(&()).is_err());
    }

    #[test]
    fn complete_request_passes_validation() {
        let req = request(
            "5f6e1c9a-0000-0000-0000-000000000000",
            "2025-03-10",
            "10:00",
            "11:00",
        );
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Pending).unwrap();
        assert_eq!(json, r#""pending""#);
    }
}
