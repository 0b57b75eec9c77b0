// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

#[tokio::main(flavor = "current_thread")]
async fn main() {
    redditbot::logging::init();
    if let Err(err) = redditbot::cli::run().await {
        redditbot::cli::die(1, &err.to_string());
    }
}
