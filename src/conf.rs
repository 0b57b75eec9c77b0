// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Configuration file loading.
//!
//! Reddit credentials live in a small TOML file in the working directory:
//!
//! ```toml
//! [credentials]
//! client_id = "your-app-id"
//! client_secret = "your-app-secret"
//! username = "your-reddit-username"
//! password = "your-reddit-password"
//! ```
//!
//! All four keys are required. Any other keys in the section are ignored.

use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fmt, fs, io};
use thiserror::Error;

/// Name of the configuration file read by the program.
pub const CONFIG_FILE: &str = "config.toml";

/// Credentials for a Reddit "script" app using the OAuth2 password grant.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct ConfigFile {
    credentials: Credentials,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads credentials from [`CONFIG_FILE`] in the current directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_file(CONFIG_FILE)
    }

    /// Loads credentials from the configuration file at `path`.
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, or if the
    /// `credentials` section or any of its keys is missing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("Reading config file");
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    /// The app's client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The app's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Reddit username the app acts as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password for [`username`](Credentials::username).
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl FromStr for Credentials {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ConfigFile = toml::from_str(s)?;
        Ok(config.credentials)
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Indicates the configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Could not read config file {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML, or a required section or key is absent.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_loads_all_four_credentials() {
        let credentials = Credentials::from_file("tests/data/config_valid.toml").unwrap();
        let expected = Credentials::new("my-client-id", "my-client-secret", "soccerfan", "hunter2");
        assert_eq!(credentials, expected);
    }

    #[test]
    fn it_does_not_modify_credential_values() {
        let credentials: Credentials = indoc::indoc! {r#"
            [credentials]
            client_id = "  padded id  "
            client_secret = "s3cr3t=="
            username = "User_Name"
            password = "p@ss word"
        "#}
        .parse()
        .unwrap();
        assert_eq!(credentials.client_id(), "  padded id  ");
        assert_eq!(credentials.client_secret(), "s3cr3t==");
        assert_eq!(credentials.username(), "User_Name");
        assert_eq!(credentials.password(), "p@ss word");
    }

    #[test]
    fn it_ignores_unknown_keys() {
        let credentials: Credentials = indoc::indoc! {r#"
            [credentials]
            client_id = "id"
            client_secret = "secret"
            username = "user"
            password = "pass"
            redirect_uri = "http://localhost"
        "#}
        .parse()
        .unwrap();
        assert_eq!(credentials, Credentials::new("id", "secret", "user", "pass"));
    }

    #[test]
    fn it_returns_an_error_if_a_key_is_missing() {
        let err = Credentials::from_file("tests/data/config_missing_password.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("password"), "{err}");
    }

    #[test]
    fn it_returns_an_error_for_each_missing_key() {
        let keys = ["client_id", "client_secret", "username", "password"];
        for missing in keys {
            let config = keys
                .iter()
                .filter(|key| **key != missing)
                .map(|key| format!("{key} = \"value\""))
                .collect::<Vec<_>>()
                .join("\n");
            let config = format!("[credentials]\n{config}\n");
            let result = config.parse::<Credentials>();
            assert!(result.is_err(), "{missing} should be required");
        }
    }

    #[test]
    fn it_returns_an_error_if_the_section_is_missing() {
        let err = Credentials::from_file("tests/data/config_no_section.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("credentials"), "{err}");
    }

    #[test]
    fn it_returns_an_error_if_the_file_is_missing() {
        let err = Credentials::from_file("tests/data/does_not_exist.toml").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Read { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn it_redacts_secrets_when_debugging() {
        let credentials = Credentials::new("id", "s3cr3t", "user", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("hunter2"));
    }
}
