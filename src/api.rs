// API client module: a small blocking HTTP client for the Gutendex
// `/books` endpoint. One instance is built at startup and shared by every
// menu action.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::collections::BTreeSet;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::BookList;
use crate::query::BookQuery;

/// Holds the reqwest blocking client and the catalog endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.trim_end_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and return the body. Anything but 200 is an error, even
    /// other 2xx codes.
    pub fn fetch(&self, url: &str) -> Result<String, ApiError> {
        debug!(%url, "GET");
        let res = self.client.get(url).send()?;
        let status = res.status();
        debug!(status = status.as_u16(), "response");
        if status != StatusCode::OK {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(res.text()?)
    }

    pub fn book_list(&self, query: &BookQuery) -> Result<BookList, ApiError> {
        let body = self.fetch(&query.to_url(&self.base_url))?;
        Ok(BookList::from_json(&body)?)
    }

    /// Titles of the matching books, in response order.
    pub fn book_titles(&self, query: &BookQuery) -> Result<Vec<String>, ApiError> {
        Ok(self.book_list(query)?.titles())
    }

    /// Unique author names across the matching books.
    pub fn author_names(&self, query: &BookQuery) -> Result<BTreeSet<String>, ApiError> {
        Ok(self.book_list(query)?.author_names())
    }
}
