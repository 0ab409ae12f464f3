use kernel::model::{id::ResourceId, resource::Resource};

#[derive(sqlx::FromRow)]
pub struct ResourceRow {
    pub resource_id: ResourceId,
    pub resource_name: String,
    pub resource_type: String,
    pub capacity: Option<i32>,
    pub location: String,
    pub available_from: Option<String>,
    pub available_to: Option<String>,
    pub description: Option<String>,
}

impl From<ResourceRow> for Resource {
    fn from(value: ResourceRow) -> Self {
        let ResourceRow {
            resource_id,
            resource_name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        } = value;
        Resource {
            resource_id,
            name: resource_name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        }
    }
}
