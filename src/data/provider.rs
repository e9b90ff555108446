use anyhow::{Context, Result};
use async_trait::async_trait;

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::API, std::time::Duration};

use crate::{data::FetchError, domain::Coordinate};

/// Abstract source of the coordinate list.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CoordinateProvider {
    /// Fetch the whole ordered list in one go.
    async fn fetch_coordinates(&self) -> Result<Vec<Coordinate>>;

    /// Human readable origin, for logs.
    fn source(&self) -> &str;
}

/// Plain GET against the coordinates endpoint. No parameters, no auth.
pub struct HttpCoordinateProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpCoordinateProvider {
    pub fn new(url: &str) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_millis(API.timeout_ms));
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CoordinateProvider for HttpCoordinateProvider {
    async fn fetch_coordinates(&self) -> Result<Vec<Coordinate>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
            .with_context(|| format!("GET {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()))
                .with_context(|| format!("GET {}", self.url));
        }

        let coordinates = response
            .json::<Vec<Coordinate>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
            .with_context(|| format!("GET {}", self.url))?;

        Ok(coordinates)
    }

    fn source(&self) -> &str {
        &self.url
    }
}
