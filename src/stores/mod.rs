// Stores layer - Data access and storage collaborators
pub mod image_store;
pub mod user_store;

pub use image_store::{ImageStorage, LocalImageStorage};
pub use user_store::UserStore;
