pub mod admin;
pub mod article;
pub mod health;
pub mod listing;
