use crate::model::{
    id::{BookingId, ResourceId},
    user::BookingOwner,
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod admission;
pub mod event;

/// Booking lifecycle. Created as `Pending`; admins move it to `Approved`
/// or `Rejected` (and back again; transitions are unrestricted).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

/// A booking joined with its owner and resource, as listed to clients.
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: BookingOwner,
    pub resource: BookingResource,
    pub purpose: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone)]
pub struct BookingResource {
    pub resource_id: ResourceId,
    pub name: String,
    pub resource_type: String,
    pub location: String,
}

/// The slice of an existing booking the admission check needs: its own
/// date/time strings and its status.
#[derive(Debug, Clone)]
pub struct BookingSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
}
