pub mod events;
pub mod health;
pub mod registration;
pub mod schema;
pub mod user;
