use crate::model::id::UserId;

pub mod event;

/// Opaque bearer token handed out at register/login time.
pub struct AccessToken(pub String);

pub struct AuthorizedUserId(pub UserId);
