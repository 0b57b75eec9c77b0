// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Retrieves subreddit listings.

use crate::reddit::{RequestHeaders, Service};
use log::{error, info};
use serde_json::Value;
use thiserror::Error;

/// Listing retrieved by default: the newest posts in r/soccer.
pub const LISTINGS_URL: &str = "https://reddit.com/r/soccer/new.json";

/// Number of posts retrieved by default.
pub const LISTINGS_LIMIT: u32 = 5;

/// Describes which listing to retrieve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    url: String,
    params: Vec<(String, String)>,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self::new(
            LISTINGS_URL,
            vec![("limit".to_string(), LISTINGS_LIMIT.to_string())],
        )
    }
}

impl ListingRequest {
    /// Creates a request for the listing at `url` with the given query
    /// parameters.
    pub fn new(url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        let url = url.into();
        Self { url, params }
    }

    /// Listing URL, without a query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters sent with the request.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Fetches the listing described by `request` and parses it as JSON.
///
/// HTTP failures are logged and produce `Ok(None)`, so the caller can carry
/// on with nothing to show. A successful response whose body is not JSON
/// is an error.
pub async fn fetch_listings<S: Service>(
    service: &S,
    request: &ListingRequest,
    headers: &RequestHeaders,
) -> Result<Option<Value>, ListingError> {
    info!("Fetching listings at url={}", request.url());
    let body = match service.get_listing(request, headers).await {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to get listings {err}");
            return Ok(None);
        }
    };
    let listings = serde_json::from_str(&body)?;
    Ok(Some(listings))
}

/// Indicates a listing was retrieved but could not be understood.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The response body is not valid JSON.
    #[error("Listings response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
