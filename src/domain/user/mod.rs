// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::UserRecord;
pub use repository::CredentialStore;
pub use value_objects::{PasswordHash, UserId};
