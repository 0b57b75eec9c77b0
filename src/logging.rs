// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Console logging.
//!
//! Log lines look like `INFO | 2025-05-23 10:13 | Reading config file`.
//! Only this crate logs at `INFO`; dependencies are limited to warnings
//! and errors.

use crate::clock::{Clock, SystemClock};
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::fmt::Display;
use std::io::Write;

/// Formats log records as `LEVEL | YYYY-MM-DD HH:MM | message`.
#[derive(Debug, Default)]
pub struct LineFormat<C: Clock> {
    clock: C,
}

impl<C: Clock> LineFormat<C> {
    /// Creates a new format that timestamps lines using `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Formats a single log line.
    pub fn line(&self, level: Level, message: impl Display) -> String {
        format!(
            "{} | {} | {}",
            level_name(level),
            self.clock.now().format("%Y-%m-%d %H:%M"),
            message
        )
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Installs the console logger.
///
/// The logger is configured entirely in code; no environment variables are
/// consulted. Calling this more than once has no effect.
pub fn init() {
    let format = LineFormat::new(SystemClock);
    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info)
        .target(Target::Stderr)
        .format(move |buf, record| writeln!(buf, "{}", format.line(record.level(), record.args())))
        .try_init();
}
