use crate::model::id::ResourceId;

pub struct CreateResource {
    pub name: String,
    pub resource_type: String,
    pub capacity: Option<i32>,
    pub location: String,
    pub available_from: Option<String>,
    pub available_to: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct UpdateResource {
    pub resource_id: ResourceId,
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub available_from: Option<String>,
    pub available_to: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct DeleteResource {
    pub resource_id: ResourceId,
}
