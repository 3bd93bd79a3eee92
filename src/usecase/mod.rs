//! Business logic layer.
//!
//! Each use-case wraps one repository port and performs a single repository
//! call per operation. Errors pass through untouched; the HTTP layer decides
//! how they are reported.

pub mod auth;
pub mod task;
pub mod user;

pub use auth::{AuthError, AuthUseCase};
pub use task::TaskUseCase;
pub use user::UserUseCase;
