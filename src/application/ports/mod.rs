// src/application/ports/mod.rs
pub mod security;
pub mod validation;
