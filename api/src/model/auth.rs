use crate::model::user::{RoleName, UserResponse};
use garde::Validate;
use kernel::model::{role::Role, user::event::CreateUser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub role: Option<RoleName>,
}

impl From<RegisterRequest> for CreateUser {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            name,
            email,
            password,
            role,
        } = value;
        Self {
            user_name: name,
            email,
            password,
            // new accounts are students unless the caller says otherwise
            role: role.map(Role::from).unwrap_or(Role::Student),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_student_role() {
        let req = RegisterRequest {
            name: "Alice Student".into(),
            email: "alice@student.edu".into(),
            password: "password1".into(),
            role: None,
        };
        let event = CreateUser::from(req);
        assert_eq!(event.role, Role::Student);
    }

    #[test]
    fn register_rejects_malformed_email() {
        let req = RegisterRequest {
            name: "Alice Student".into(),
            email: "not-an-email".into(),
            password: "password1".into(),
            role: None,
        };
        assert!(req.validate(&()).is_err());
    }
}
