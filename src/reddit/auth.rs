// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! OAuth2 authentication for Reddit "script" apps.
//!
//! Reddit hands out bearer tokens in exchange for an app's client ID and
//! secret plus the username and password of the account the app acts as
//! (the OAuth2 "password grant"). Tokens are never refreshed: the one
//! obtained at startup is used until the program exits.

use crate::conf::Credentials;
use crate::http::HTTPError;
use crate::reddit::{RequestHeaders, Service};
use log::{error, info};
use reqwest::header::InvalidHeaderValue;
use serde_json::Value;
use thiserror::Error;

/// Asks Reddit for an access token and returns it.
///
/// Fails if the request fails or if the response does not contain a
/// usable token.
pub async fn request_token<S: Service>(
    service: &S,
    credentials: &Credentials,
    headers: &RequestHeaders,
) -> Result<String, AuthError> {
    let body = service.post_access_token(credentials, headers).await?;
    access_token(&body).ok_or(AuthError::MissingToken { body })
}

/// Authorizes `headers` with a freshly requested bearer token.
///
/// Returns the authorized headers on success. On failure the error is
/// logged and `headers` is returned as it was, so requests made with the
/// result go out anonymously.
pub async fn authorize<S: Service>(
    service: &S,
    credentials: &Credentials,
    headers: RequestHeaders,
) -> RequestHeaders {
    info!("Requesting access token");
    let token = match request_token(service, credentials, &headers).await {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to get access token {err}");
            return headers;
        }
    };

    match headers.with_bearer(&token) {
        Ok(authorized) => {
            info!("Access token successfully saved");
            authorized
        }
        Err(err) => {
            error!("Failed to get access token {}", AuthError::from(err));
            headers
        }
    }
}

fn access_token(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("access_token")?
        .as_str()
        .filter(|token| !token.is_empty())
        .map(String::from)
}

/// Indicates an access token could not be obtained.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request itself failed.
    #[error("{0}")]
    Http(#[from] HTTPError),

    /// Reddit answered, but without an access token.
    #[error("no access token in response: {body}")]
    MissingToken {
        /// Raw response body.
        body: String,
    },

    /// Reddit returned a token that cannot be sent in a header.
    #[error("invalid access token: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}
