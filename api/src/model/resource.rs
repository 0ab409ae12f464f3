use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::ResourceId,
    resource::{
        event::{CreateResource, UpdateResource},
        Resource,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[garde(range(min = 0))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    #[serde(default)]
    pub location: String,
    #[garde(skip)]
    pub available_from: Option<String>,
    #[garde(skip)]
    pub available_to: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
}

impl From<CreateResourceRequest> for CreateResource {
    fn from(value: CreateResourceRequest) -> Self {
        let CreateResourceRequest {
            name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        } = value;
        Self {
            name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(skip)]
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    #[garde(range(min = 0))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(skip)]
    pub available_from: Option<String>,
    #[garde(skip)]
    pub available_to: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
}

#[derive(new)]
pub struct UpdateResourceRequestWithId(ResourceId, UpdateResourceRequest);

impl From<UpdateResourceRequestWithId> for UpdateResource {
    fn from(value: UpdateResourceRequestWithId) -> Self {
        let UpdateResourceRequestWithId(
            resource_id,
            UpdateResourceRequest {
                name,
                resource_type,
                capacity,
                location,
                available_from,
                available_to,
                description,
            },
        ) = value;
        Self {
            resource_id,
            name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesResponse {
    pub items: Vec<ResourceResponse>,
}

impl From<Vec<Resource>> for ResourcesResponse {
    fn from(value: Vec<Resource>) -> Self {
        Self {
            items: value.into_iter().map(ResourceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub capacity: Option<i32>,
    pub location: String,
    pub available_from: Option<String>,
    pub available_to: Option<String>,
    pub description: Option<String>,
}

impl From<Resource> for ResourceResponse {
    fn from(value: Resource) -> Self {
        let Resource {
            resource_id,
            name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        } = value;
        Self {
            id: resource_id,
            name,
            resource_type,
            capacity,
            location,
            available_from,
            available_to,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_a_name() {
        let req = CreateResourceRequest {
            name: "".into(),
            resource_type: "lab".into(),
            capacity: Some(40),
            location: "Building C".into(),
            available_from: None,
            available_to: None,
            description: None,
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn create_request_rejects_negative_capacity() {
        let req = CreateResourceRequest {
            name: "Computer Lab 1".into(),
            resource_type: "lab".into(),
            capacity: Some(-1),
            location: "Building C".into(),
            available_from: None,
            available_to: None,
            description: None,
        };
        assert!(req.validate(&()).is_err());
    }
}
