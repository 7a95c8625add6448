mod authenticate;
mod service;

pub use authenticate::Authenticator;
pub use service::{AuthUseCase, AuthUseCaseBuilder};
