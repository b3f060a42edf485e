pub mod auth;
pub mod dashboard;
pub mod health;
pub mod owner;
pub mod restaurant;
pub mod survey;
