// Wire types - request and response payloads
pub mod common;
pub mod user;
