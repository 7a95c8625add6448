// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod login_router;
pub mod request;
pub mod response;
pub mod routes;
pub mod state;
