// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::conf::{ConfigError, Credentials};
use crate::reddit::auth;
use crate::reddit::listing::{self, ListingError};
use crate::reddit::{ListingRequest, RedditService, RequestHeaders, Service};
use crate::thing::{self, Post};
use crate::view::Viewable;
use log::error;
use std::process;
use thiserror::Error;

/// Logs `message` and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    error!("{message}");
    process::exit(error_code);
}

/// Runs the program: loads credentials from the configuration file,
/// fetches the newest posts, and prints them.
///
/// Returns an [`enum@Error`] only for failures the program cannot carry on
/// from. Authentication and HTTP failures are logged and result in fewer
/// (or no) posts being printed.
pub async fn run() -> Result<(), Error> {
    let credentials = Credentials::load()?;
    let posts = Runner::<RedditService>::default().posts(&credentials).await?;
    println!("{}", posts.view());
    Ok(())
}

/// Fetches posts from Reddit.
#[derive(Debug)]
pub struct Runner<S: Service> {
    service: S,
    listing: ListingRequest,
}

impl Default for Runner<RedditService> {
    /// Creates a runner that talks to Reddit and fetches the default listing.
    fn default() -> Self {
        Self::new(RedditService::default())
    }
}

impl<S: Service> Runner<S> {
    /// Creates a runner that fetches the default listing using `service`.
    pub fn new(service: S) -> Self {
        Self::with_listing(service, ListingRequest::default())
    }

    /// Creates a runner that fetches `listing` using `service`.
    pub fn with_listing(service: S, listing: ListingRequest) -> Self {
        Self { service, listing }
    }

    /// The service used to talk to Reddit.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Authenticates, fetches the listing, and extracts its posts.
    ///
    /// The listing is fetched even if authentication fails; in that case
    /// the request is simply made without a bearer token. Returns `Ok(None)`
    /// if the listing could not be retrieved.
    pub async fn posts(&self, credentials: &Credentials) -> Result<Option<Vec<Post>>, Error> {
        let headers = auth::authorize(&self.service, credentials, RequestHeaders::default()).await;
        let listings = listing::fetch_listings(&self.service, &self.listing, &headers).await?;
        Ok(thing::extract_posts(listings.as_ref())?)
    }
}

/// An error the program cannot recover from.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listing response was not JSON.
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    /// The listing did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}
