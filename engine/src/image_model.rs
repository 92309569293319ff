use std::pin::Pin;

use crate::request::GenerationRequest;

mod error;
pub use error::GenerationError;

pub mod open_ai;
pub use open_ai::{Endpoint, OpenAIImages};
pub use reqwest::StatusCode;

pub type GenerationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<String>, GenerationError>> + Send + 'a>>;

/// A service that turns a prompt into hosted images.
pub trait ImageModel {
    /// Sends `request` once and returns the image urls in the order the
    /// service listed them.
    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> GenerationFuture<'a>;
}
