pub mod auth;
pub mod project;
pub mod team;
pub mod user;
