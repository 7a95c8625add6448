// src/application/dto/mod.rs
mod auth;

pub use auth::AccessToken;
