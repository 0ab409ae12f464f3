use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
        } = value;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role: {role}")))?;
        Ok(User {
            user_id,
            user_name,
            email,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_unknown_role_fails_conversion() {
        let row = UserRow {
            user_id: UserId::new(),
            user_name: "Alice Student".into(),
            email: "alice@student.edu".into(),
            role: "janitor".into(),
        };
        assert!(User::try_from(row).is_err());
    }

    #[test]
    fn row_converts_to_user() {
        let row = UserRow {
            user_id: UserId::new(),
            user_name: "Campus Admin".into(),
            email: "admin@college.edu".into(),
            role: "admin".into(),
        };
        let user = User::try_from(row).unwrap();
        assert_eq!(user.role, Role::Admin);
    }
}
