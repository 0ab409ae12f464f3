//! The booking admission rule.
//!
//! A candidate booking is admitted when it lies inside the resource's
//! declared daily availability window (if any) and does not overlap any
//! non-rejected booking for the same resource and date. Intervals are
//! half-open, so a booking ending at 12:00 and one starting at 12:00 do
//! not collide.
//!
//! `evaluate` is a pure function of its inputs. It performs no I/O, and
//! the order of the existing bookings does not change the result. It is
//! the caller's job to run it atomically with the insert (the adapter
//! wraps it in a SERIALIZABLE transaction); two calls against the same
//! snapshot will happily admit conflicting candidates.

use crate::model::{
    booking::{event::CreateBooking, BookingSlot, BookingStatus},
    resource::Resource,
};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date or time: {0}")]
    InvalidDateTime(String),
    #[error("requested time outside resource availability")]
    OutsideAvailability,
    #[error("time slot overlaps with existing booking")]
    SlotOverlap,
}

/// An admitted booking, ready for persistence. Always `Pending`.
#[derive(Debug)]
pub struct BookingDraft {
    pub candidate: CreateBooking,
    pub status: BookingStatus,
}

pub fn evaluate(
    candidate: &CreateBooking,
    resource: &Resource,
    existing: &[BookingSlot],
) -> Result<BookingDraft, AdmissionError> {
    require_non_empty("date", &candidate.date)?;
    require_non_empty("startTime", &candidate.start_time)?;
    require_non_empty("endTime", &candidate.end_time)?;

    let req_start = combine(&candidate.date, &candidate.start_time)?;
    let req_end = combine(&candidate.date, &candidate.end_time)?;

    if let Some((from, to)) = resource.availability_window() {
        // Window instants are computed with the candidate's date: the
        // window is daily, resource-local wall-clock.
        let avail_start = combine(&candidate.date, from)?;
        let avail_end = combine(&candidate.date, to)?;
        if req_start < avail_start || req_end > avail_end {
            return Err(AdmissionError::OutsideAvailability);
        }
    }

    for slot in existing {
        // Rejection frees the slot immediately; rejected rows never block
        // even when the caller forgot to filter them out.
        if slot.status == BookingStatus::Rejected {
            continue;
        }
        let slot_start = combine(&slot.date, &slot.start_time)?;
        let slot_end = combine(&slot.date, &slot.end_time)?;
        if req_start < slot_end && slot_start < req_end {
            return Err(AdmissionError::SlotOverlap);
        }
    }

    Ok(BookingDraft {
        candidate: candidate.clone(),
        status: BookingStatus::Pending,
    })
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), AdmissionError> {
    if value.trim().is_empty() {
        return Err(AdmissionError::MissingField(field));
    }
    Ok(())
}

/// Textual combination of "YYYY-MM-DD" + "HH:MM" into a local instant.
/// No timezone conversion happens anywhere in the booking path.
fn combine(date: &str, time: &str) -> Result<NaiveDateTime, AdmissionError> {
    let joined = format!("{date}T{time}:00");
    NaiveDateTime::parse_from_str(&joined, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| AdmissionError::InvalidDateTime(joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{ResourceId, UserId};
    use rstest::rstest;

    fn lab(window: Option<(&str, &str)>) -> Resource {
        Resource {
            resource_id: ResourceId::new(),
            name: "Computer Lab 1".into(),
            resource_type: "lab".into(),
            capacity: Some(40),
            location: "Building C".into(),
            available_from: window.map(|(f, _)| f.to_string()),
            available_to: window.map(|(_, t)| t.to_string()),
            description: None,
        }
    }

    fn candidate(date: &str, start: &str, end: &str) -> CreateBooking {
        CreateBooking::new(
            ResourceId::new(),
            UserId::new(),
            Some("study group".into()),
            date.into(),
            start.into(),
            end.into(),
        )
    }

    fn slot(start: &str, end: &str, status: BookingStatus) -> BookingSlot {
        BookingSlot {
            date: "2025-03-10".into(),
            start_time: start.into(),
            end_time: end.into(),
            status,
        }
    }

    #[test]
    fn inside_window_without_conflicts_is_admitted() {
        let resource = lab(Some(("09:00", "18:00")));
        let draft = evaluate(
            &candidate("2025-03-10", "10:00", "12:00"),
            &resource,
            &[slot("13:00", "15:00", BookingStatus::Approved)],
        )
        .unwrap();
        assert_eq!(draft.status, BookingStatus::Pending);
        assert_eq!(draft.candidate.date, "2025-03-10");
    }

    #[rstest]
    #[case("08:00", "10:00")] // starts before the window opens
    #[case("17:00", "19:00")] // runs past the window close
    #[case("06:00", "20:00")] // spills over both ends
    fn outside_window_is_rejected(#[case] start: &str, #[case] end: &str) {
        let resource = lab(Some(("09:00", "18:00")));
        let err = evaluate(&candidate("2025-03-10", start, end), &resource, &[]).unwrap_err();
        assert_eq!(err, AdmissionError::OutsideAvailability);
    }

    #[test]
    fn window_check_runs_even_when_a_conflict_also_exists() {
        let resource = lab(Some(("09:00", "18:00")));
        let existing = [slot("08:00", "10:00", BookingStatus::Approved)];
        let err =
            evaluate(&candidate("2025-03-10", "08:00", "09:30"), &resource, &existing).unwrap_err();
        assert_eq!(err, AdmissionError::OutsideAvailability);
    }

    #[test]
    fn no_window_means_unbounded_availability() {
        let resource = lab(None);
        assert!(evaluate(&candidate("2025-03-10", "00:30", "23:30"), &resource, &[]).is_ok());
    }

    #[test]
    fn half_declared_window_is_ignored() {
        let mut resource = lab(Some(("09:00", "18:00")));
        resource.available_to = None;
        assert!(evaluate(&candidate("2025-03-10", "05:00", "07:00"), &resource, &[]).is_ok());
    }

    #[rstest]
    #[case("11:00", "13:00")] // overlaps the tail
    #[case("09:00", "10:30")] // overlaps the head
    #[case("10:30", "11:30")] // fully inside
    #[case("09:00", "13:00")] // fully covers
    fn overlapping_pending_booking_blocks(#[case] start: &str, #[case] end: &str) {
        let resource = lab(None);
        let existing = [slot("10:00", "12:00", BookingStatus::Pending)];
        let err = evaluate(&candidate("2025-03-10", start, end), &resource, &existing).unwrap_err();
        assert_eq!(err, AdmissionError::SlotOverlap);
    }

    #[test]
    fn approved_booking_blocks_too() {
        let resource = lab(None);
        let existing = [slot("10:00", "12:00", BookingStatus::Approved)];
        let err = evaluate(&candidate("2025-03-10", "11:00", "13:00"), &resource, &existing)
            .unwrap_err();
        assert_eq!(err, AdmissionError::SlotOverlap);
    }

    #[rstest]
    #[case("12:00", "13:00")] // starts exactly where the other ends
    #[case("08:00", "10:00")] // ends exactly where the other starts
    fn touching_intervals_do_not_overlap(#[case] start: &str, #[case] end: &str) {
        let resource = lab(None);
        let existing = [slot("10:00", "12:00", BookingStatus::Approved)];
        assert!(evaluate(&candidate("2025-03-10", start, end), &resource, &existing).is_ok());
    }

    #[test]
    fn rejected_booking_never_blocks() {
        let resource = lab(None);
        let existing = [slot("10:00", "12:00", BookingStatus::Rejected)];
        assert!(evaluate(&candidate("2025-03-10", "10:30", "11:30"), &resource, &existing).is_ok());
    }

    #[test]
    fn result_is_independent_of_existing_order() {
        let resource = lab(None);
        let a = slot("08:00", "09:00", BookingStatus::Approved);
        let b = slot("10:00", "12:00", BookingStatus::Pending);
        let cand = candidate("2025-03-10", "11:00", "13:00");
        let forward = evaluate(&cand, &resource, &[a.clone(), b.clone()]).unwrap_err();
        let backward = evaluate(&cand, &resource, &[b, a]).unwrap_err();
        assert_eq!(forward, backward);
    }

    #[rstest]
    #[case("", "10:00", "11:00", "date")]
    #[case("2025-03-10", "", "11:00", "startTime")]
    #[case("2025-03-10", "10:00", "", "endTime")]
    fn missing_fields_fail_before_overlap_logic(
        #[case] date: &str,
        #[case] start: &str,
        #[case] end: &str,
        #[case] field: &'static str,
    ) {
        let resource = lab(None);
        // would otherwise collide, proving validation runs first
        let existing = [slot("10:00", "11:00", BookingStatus::Pending)];
        let err = evaluate(&candidate(date, start, end), &resource, &existing).unwrap_err();
        assert_eq!(err, AdmissionError::MissingField(field));
    }

    #[rstest]
    #[case("2025-13-40", "10:00", "11:00")]
    #[case("2025-03-10", "25:99", "26:00")]
    fn malformed_date_or_time_is_a_validation_failure(
        #[case] date: &str,
        #[case] start: &str,
        #[case] end: &str,
    ) {
        let resource = lab(None);
        let err = evaluate(&candidate(date, start, end), &resource, &[]).unwrap_err();
        assert!(matches!(err, AdmissionError::InvalidDateTime(_)));
    }

    #[test]
    fn two_evaluations_against_the_same_snapshot_both_admit() {
        // The checker alone cannot see a concurrent rival; closing this
        // race is the persistence layer's job.
        let resource = lab(None);
        let snapshot: Vec<BookingSlot> = vec![];
        let first = candidate("2025-03-10", "10:00", "12:00");
        let second = candidate("2025-03-10", "11:00", "13:00");
        assert!(evaluate(&first, &resource, &snapshot).is_ok());
        assert!(evaluate(&second, &resource, &snapshot).is_ok());
    }
}
