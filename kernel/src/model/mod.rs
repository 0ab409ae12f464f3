pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod id;
pub mod resource;
pub mod role;
pub mod user;
