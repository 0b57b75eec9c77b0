// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Headers attached to every request made to Reddit.

use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};

/// User agent sent with every request.
pub const USER_AGENT: &str = "redditbot";

/// An immutable set of request headers.
///
/// Every request starts from [`RequestHeaders::default()`], which only
/// carries the user agent. Authorizing the headers produces a _new_ value,
/// so whoever holds the unauthorized headers is never affected.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestHeaders {
    map: HeaderMap,
}

impl Default for RequestHeaders {
    fn default() -> Self {
        let mut map = HeaderMap::new();
        map.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        Self { map }
    }
}

impl RequestHeaders {
    /// Returns a copy of these headers with `Authorization: bearer <token>`
    /// added. Existing headers are kept.
    ///
    /// Fails if `token` contains characters that are not allowed in an
    /// HTTP header.
    ///
    /// # Examples
    ///
    /// ```
    /// use redditbot::reddit::RequestHeaders;
    /// let headers = RequestHeaders::default();
    /// let authorized = headers.with_bearer("abc").unwrap();
    /// assert_eq!(authorized.get("authorization"), Some("bearer abc"));
    /// assert_eq!(authorized.get("user-agent"), Some("redditbot"));
    /// assert!(!headers.is_authorized());
    /// ```
    pub fn with_bearer(&self, token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("bearer {token}"))?;
        value.set_sensitive(true);
        let mut map = self.map.clone();
        map.insert(header::AUTHORIZATION, value);
        Ok(Self { map })
    }

    /// The value of the header called `name`, if present and printable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(|value| value.to_str().ok())
    }

    /// True if an `Authorization` header is present.
    pub fn is_authorized(&self) -> bool {
        self.map.contains_key(header::AUTHORIZATION)
    }

    /// The headers as a map that can be handed to a request builder.
    pub fn to_header_map(&self) -> HeaderMap {
        self.map.clone()
    }
}
