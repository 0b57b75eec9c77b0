// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Reddit API access: authentication, listings, and the HTTPS connector
//! used by both.

pub mod auth;
pub mod headers;
pub mod listing;
pub mod service;

pub use headers::RequestHeaders;
pub use listing::ListingRequest;
pub use service::{RedditService, Service};
