//! Storefront API client
//!
//! Uses async reqwest. One-shot request/response only: no timeouts, retries
//! or caching are configured.

use parts_common::{CatalogError, GalleryEntry, Product, Result};
use serde::{de::DeserializeOwned, Serialize};

pub const PRODUCTS_PATH: &str = "/api/products";
pub const GALLERY_PATH: &str = "/api/gallery";

/// Client for the storefront's products and gallery endpoints
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl StorefrontClient {
    /// Creates a client for the storefront at `base_url` (e.g. "http://localhost:3000")
    pub fn new(base_url: &str) -> Self {
        log::debug!("Creating storefront client for {}", base_url);
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/products
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let records: Vec<serde_json::Value> = self.get_json(PRODUCTS_PATH).await?;
        let products: Vec<Product> = decode_records(records, "product");
        log::info!("Fetched {} products", products.len());
        Ok(products)
    }

    /// GET /api/gallery
    pub async fn fetch_gallery(&self) -> Result<Vec<GalleryEntry>> {
        let records: Vec<serde_json::Value> = self.get_json(GALLERY_PATH).await?;
        let gallery: Vec<GalleryEntry> = decode_records(records, "gallery entry");
        log::info!("Fetched {} gallery entries", gallery.len());
        Ok(gallery)
    }

    /// POST /api/gallery with `body` as JSON. The response body is not inspected.
    pub async fn post_gallery<T: Serialize + ?Sized>(&self, body: &T) -> Result<()> {
        let url = format!("{}{}", self.base_url, GALLERY_PATH);
        log::debug!("Posting gallery submission to {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(CatalogError::HttpStatus(response.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Decode each record on its own; a malformed record is skipped, not fatal
fn decode_records<T: DeserializeOwned>(records: Vec<serde_json::Value>, kind: &str) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping malformed {} at index {}: {}", kind, index, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
