use crate::model::id::ResourceId;

pub mod event;

/// A bookable campus asset (room, lab, field, equipment).
#[derive(Debug, Clone)]
pub struct Resource {
    pub resource_id: ResourceId,
    pub name: String,
    pub resource_type: String,
    pub capacity: Option<i32>,
    pub location: String,
    pub available_from: Option<String>,
    pub available_to: Option<String>,
    pub description: Option<String>,
}

impl Resource {
    /// The daily window bookings must fall inside, when the resource
    /// declares one. Requires both bounds; a half-declared window counts
    /// as unbounded.
    pub fn availability_window(&self) -> Option<(&str, &str)> {
        match (self.available_from.as_deref(), self.available_to.as_deref()) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}
