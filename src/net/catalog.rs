//! HTTP source for the project document.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use gallery::catalog::{CatalogError, CatalogSource, ProjectCatalog};

/// Fetches the project document with a GET request.
#[derive(Clone, Debug)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| CatalogError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(CatalogError::Status(resp.status()));
            }
            resp.text().await.map_err(|e| CatalogError::Fetch(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(CatalogError::Fetch(format!("{}: not available outside the browser", self.url)))
        }
    }
}

/// Load the catalog from `url`, degrading to an empty catalog on any failure.
pub async fn load_projects(url: &str) -> ProjectCatalog {
    ProjectCatalog::load(&HttpCatalogSource::new(url)).await
}
