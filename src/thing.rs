// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. Listings
//! wrap things in a `{"data": {"children": [{"data": {...}}, ...]}}`
//! envelope; this module unwraps that envelope into [`Post`]s.

use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

/// A Reddit post, reduced to the fields worth displaying.
///
/// Reddit does not always send every field, so each one is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    title: Option<String>,
    author: Option<String>,
    upvote_count: Option<i64>,
}

impl Post {
    /// Creates a new post.
    pub fn new(title: Option<&str>, author: Option<&str>, upvote_count: Option<i64>) -> Self {
        Self {
            title: title.map(String::from),
            author: author.map(String::from),
            upvote_count,
        }
    }

    /// Parses a single listing child, i.e., `{"data": {"title": ...}}`.
    ///
    /// `index` is the child's position in the listing and is only used to
    /// report errors.
    fn parse(child: &Value, index: usize) -> Result<Self, Error> {
        let data = child
            .get("data")
            .filter(|data| data.is_object())
            .ok_or(Error::MissingChildData(index))?;
        Ok(Self {
            title: data.get("title").and_then(Value::as_str).map(String::from),
            author: data.get("author").and_then(Value::as_str).map(String::from),
            upvote_count: data.get("ups").and_then(Value::as_i64),
        })
    }

    /// Post title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Username of the post's author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Number of upvotes.
    pub fn upvote_count(&self) -> Option<i64> {
        self.upvote_count
    }
}

/// Extracts posts from a listing, preserving the listing's order.
///
/// Returns `Ok(None)` (and logs a warning) when there is no listing to
/// extract from. Returns an [`enum@Error`] if the listing does not have the
/// shape Reddit normally sends.
pub fn extract_posts(listings: Option<&Value>) -> Result<Option<Vec<Post>>, Error> {
    let Some(listings) = listings else {
        warn!("No listings retrieved.");
        return Ok(None);
    };
    info!("Successfully retrieved listings.");

    info!("Extracting posts from listings");
    let children = listings
        .get("data")
        .filter(|data| data.is_object())
        .ok_or(Error::MissingData)?
        .get("children")
        .and_then(Value::as_array)
        .ok_or(Error::MissingChildren)?;

    let posts = children
        .iter()
        .enumerate()
        .map(|(i, child)| Post::parse(child, i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(posts))
}

/// An error parsing a listing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The listing has no top-level `data` object.
    #[error("Listing has no `data` object")]
    MissingData,

    /// The listing's `data` has no `children` array.
    #[error("Listing has no `data.children` array")]
    MissingChildren,

    /// A child at the given index has no `data` object.
    #[error("Listing child {0} has no `data` object")]
    MissingChildData(usize),
}
