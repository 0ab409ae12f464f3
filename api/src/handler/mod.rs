pub mod admin;
pub mod auth;
pub mod booking;
pub mod health;
pub mod resource;
