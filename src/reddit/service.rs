// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. They return raw response bodies; making sense
//! of those bodies is left to [`auth`](crate::reddit::auth) and
//! [`listing`](crate::reddit::listing).

use crate::conf::Credentials;
use crate::http::{HTTPError, HTTPResult};
use crate::reddit::{ListingRequest, RequestHeaders};
use reqwest::{Client, Request, Response};

/// Reddit's OAuth2 token endpoint.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// A service for talking to Reddit.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Exchanges `credentials` for an access token using the OAuth2
    /// password grant and returns the raw response body.
    fn post_access_token(
        &self,
        credentials: &Credentials,
        headers: &RequestHeaders,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Performs a GET request for the listing described by `request` and
    /// returns the raw response body.
    fn get_listing(
        &self,
        request: &ListingRequest,
        headers: &RequestHeaders,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
}

impl Default for RedditService {
    /// Creates a new Reddit service.
    fn default() -> Self {
        let client = Client::new();
        Self { client }
    }
}

/// The form body of an OAuth2 password grant for `credentials`.
///
/// The client ID and secret are not part of the body; they are sent using
/// HTTP Basic authentication.
pub(crate) fn password_grant(credentials: &Credentials) -> [(&'static str, &str); 3] {
    [
        ("grant_type", "password"),
        ("username", credentials.username()),
        ("password", credentials.password()),
    ]
}

impl RedditService {
    /// Builds the password-grant request sent to [`TOKEN_URL`].
    ///
    /// The client ID and secret go in a Basic `Authorization` header; the
    /// username and password go in a form-encoded body.
    pub fn token_request(
        &self,
        credentials: &Credentials,
        headers: &RequestHeaders,
    ) -> reqwest::Result<Request> {
        self.client
            .post(TOKEN_URL)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .headers(headers.to_header_map())
            .form(&password_grant(credentials))
            .build()
    }

    /// Builds the GET request for the listing described by `request`.
    pub fn listing_request(
        &self,
        request: &ListingRequest,
        headers: &RequestHeaders,
    ) -> reqwest::Result<Request> {
        self.client
            .get(request.url())
            .query(request.params())
            .headers(headers.to_header_map())
            .build()
    }

    async fn body(resp: Response) -> HTTPResult<String> {
        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}

impl Service for RedditService {
    async fn post_access_token(
        &self,
        credentials: &Credentials,
        headers: &RequestHeaders,
    ) -> HTTPResult<String> {
        let req = self.token_request(credentials, headers)?;
        let resp = self.client.execute(req).await?;
        Self::body(resp).await
    }

    async fn get_listing(
        &self,
        request: &ListingRequest,
        headers: &RequestHeaders,
    ) -> HTTPResult<String> {
        let req = self.listing_request(request, headers)?;
        let resp = self.client.execute(req).await?;
        Self::body(resp).await
    }
}
