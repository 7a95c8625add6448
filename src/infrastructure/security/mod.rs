// src/infrastructure/security/mod.rs
pub mod email;
pub mod password;
pub mod token;
