pub mod image_model;
pub mod request;

pub use image_model::{GenerationError, ImageModel};
pub use request::{GenerationRequest, RequestArgs, UsageError};
