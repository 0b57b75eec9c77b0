// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::thing::Post;
use indoc::formatdoc;
use std::fmt::Display;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

// Missing values are shown as "None".
fn or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("None"), |value| value.to_string())
}

impl Viewable for Post {
    fn view(&self) -> String {
        formatdoc! {"
            Post(
                title={},
                author={},
                upvote_count={}
            )",
            or_none(self.title()),
            or_none(self.author()),
            or_none(self.upvote_count()),
        }
    }
}

impl<T: Viewable> Viewable for [T] {
    fn view(&self) -> String {
        let items = self.iter().map(|item| item.view()).collect::<Vec<_>>();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Viewable> Viewable for Vec<T> {
    fn view(&self) -> String {
        self.as_slice().view()
    }
}

impl<T: Viewable> Viewable for Option<T> {
    fn view(&self) -> String {
        match self {
            Some(item) => item.view(),
            None => String::from("None"),
        }
    }
}
