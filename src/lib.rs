// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! redditbot signs in to Reddit as a "script" app and prints the five
//! newest posts in [r/soccer], showing each post's title, author, and
//! upvote count.
//!
//! # Setup
//!
//! 1. [Register a script app] with Reddit and note its client ID and
//!    secret.
//! 2. Create a file called `config.toml` in the directory you will run
//!    redditbot from:
//!
//!    ```toml
//!    [credentials]
//!    client_id = "your-app-id"
//!    client_secret = "your-app-secret"
//!    username = "your-reddit-username"
//!    password = "your-reddit-password"
//!    ```
//!
//! 3. Run the program:
//!
//!    ```bash
//!    redditbot
//!    ```
//!
//! Progress is logged to standard error and the posts are printed to
//! standard output. If Reddit refuses the credentials, redditbot still
//! fetches the listing, just without signing in.
//!
//! # License
//!
//! redditbot is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [Register a script app]: https://www.reddit.com/prefs/apps
//! [r/soccer]: https://www.reddit.com/r/soccer/

pub mod cli;
pub mod clock;
pub mod conf;
pub mod http;
pub mod logging;
pub mod reddit;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
