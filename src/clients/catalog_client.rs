use crate::{error::CatalogError, extractors::catalog_extractor::CatalogExtractor, model::Movie};
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use std::path::PathBuf;

use reqwest::{header, Client, StatusCode};

/// Reads the static catalog, either from disk or from an http(s) URL.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let user_agent = header::HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| CatalogError::Http {
                url: String::new(),
                message: format!("Could not build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    pub fn is_remote(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

    pub async fn load(&self, source: &str) -> Result<Vec<Movie>, CatalogError> {
        log::info!("Loading catalog from {}", source);
        let body = if Self::is_remote(source) {
            self.get_text_from_url(source).await?
        } else {
            Self::read_file(source).await?
        };

        let movies = CatalogExtractor::extract_movies(body.as_str())?;
        log::info!("Loaded {} movies", movies.len());
        Ok(movies)
    }

    async fn read_file(path: &str) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: PathBuf::from(path),
                source,
            })
    }

    pub async fn get_text_from_url(&self, url: &str) -> Result<String, CatalogError> {
        let retry_strategy = ExponentialBackoff::from_millis(10).map(jitter).take(5);
        Retry::spawn(retry_strategy, || async move {
            self.get_text_from_url_no_retry(url).await
        })
        .await
    }

    async fn get_text_from_url_no_retry(&self, url: &str) -> Result<String, CatalogError> {
        let http_error = |message: String| CatalogError::Http {
            url: url.to_string(),
            message,
        };

        let resp = self.client.get(url).send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", url, e);
            http_error(e.to_string())
        })?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(http_error("404 page not found".to_string()));
        }
        if !resp.status().is_success() {
            return Err(http_error(format!("unexpected status {}", resp.status())));
        }

        resp.text()
            .await
            .map_err(|e| http_error(format!("Failed to read response body: {}", e)))
    }
}
