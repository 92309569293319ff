use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationError, GenerationFuture, ImageModel};
use crate::request::GenerationRequest;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Where and as whom requests are sent. The api key travels with each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub api_base: String,
    pub organization: Option<String>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            organization: None,
        }
    }
}

impl Endpoint {
    pub fn generations_url(&self) -> String {
        format!("{}/images/generations", self.api_base.trim_end_matches('/'))
    }
}

/// Client for the OpenAI images API (DALL·E and friends).
#[derive(Debug, Clone)]
pub struct OpenAIImages {
    client: Client,
    endpoint: Endpoint,
}

impl OpenAIImages {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl ImageModel for OpenAIImages {
    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> GenerationFuture<'a> {
        Box::pin(async move {
            let url = self.endpoint.generations_url();
            info!(
                "Requesting {} image(s) from {url} with {}",
                request.count, request.model
            );
            debug!("request: {request:#?}");

            let mut builder = self
                .client
                .post(&url)
                .bearer_auth(&request.api_key)
                .json(&ImagesRequest::from(request));
            if let Some(org) = &self.endpoint.organization {
                builder = builder.header("OpenAI-Organization", org);
            }

            let resp = builder.send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            debug!("Response status: {status}");

            if !status.is_success() {
                return Err(GenerationError::from_response(status, &body));
            }

            let urls = extract_urls(&body)?;
            info!("Received {} image url(s)", urls.len());
            Ok(urls)
        })
    }
}

fn extract_urls(body: &str) -> Result<Vec<String>, GenerationError> {
    let resp: ImagesResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::malformed(format!("Unexpected response body: {e}")))?;

    resp.data
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            item.url
                .ok_or_else(|| GenerationError::malformed(format!("Image {i} has no url")))
        })
        .collect()
}

//
// ===== OpenAI wire types =====
//

#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    n: u32,
}

impl<'a> From<&'a GenerationRequest> for ImagesRequest<'a> {
    fn from(req: &'a GenerationRequest) -> Self {
        Self {
            model: &req.model,
            prompt: &req.prompt,
            size: &req.size,
            quality: &req.quality,
            n: req.count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}
