// API-facing error types
pub mod user;

// Re-exports for convenience
pub use user::{UserApiError, UserErrorResponse};

#[cfg(test)]
mod user_test;
