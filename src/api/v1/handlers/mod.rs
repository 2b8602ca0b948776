pub mod cookies;
pub mod health;
