pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod health;
pub mod resource;
pub mod user;
