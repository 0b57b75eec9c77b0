use crate::clock::{Clock, DateTime, FixedOffset};
use crate::conf::Credentials;
use crate::http::{HTTPError, HTTPResult};
use crate::reddit::service::{TOKEN_URL, password_grant};
use crate::reddit::{ListingRequest, RequestHeaders, Service};
use log::{Level, LevelFilter, Log, Metadata, Record};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::fs;
use std::sync::Mutex;

thread_local! {
    static LOGGED: RefCell<Vec<(Level, String)>> = const { RefCell::new(vec![]) };
}

/// Remembers every record logged on the current thread, then hands it to
/// env_logger for display.
struct RecordingLogger {
    inner: env_logger::Logger,
}

impl Log for RecordingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LOGGED.with(|logged| {
            logged
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn do_logging() {
    let inner = env_logger::builder().is_test(true).build();
    if log::set_boxed_logger(Box::new(RecordingLogger { inner })).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    LOGGED.with(|logged| logged.borrow_mut().clear());
}

/// Messages logged at `level` on the current thread since [`do_logging`]
/// was last called.
pub fn logged(level: Level) -> Vec<String> {
    LOGGED.with(|logged| {
        logged
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// A canned response from a [`TestService`].
#[derive(Clone, Debug)]
pub enum Reply {
    Body(String),
    Status(StatusCode),
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Reply::Body(body.to_string())
    }

    pub fn data(file: &str) -> Self {
        Reply::Body(load_data(file))
    }

    pub fn status(code: u16) -> Self {
        Reply::Status(StatusCode::from_u16(code).expect("invalid status code"))
    }

    fn into_result(self) -> HTTPResult<String> {
        match self {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(HTTPError::Http(status)),
        }
    }
}

/// A request received by a [`TestService`].
///
/// `params` holds the form body for token requests and the query string
/// for listing requests.
#[derive(Clone, Debug)]
pub struct SentRequest {
    pub url: String,
    pub headers: RequestHeaders,
    pub basic_auth: Option<(String, String)>,
    pub params: Vec<(String, String)>,
}

/// A deterministic Reddit service that answers with canned replies and
/// remembers every request it was sent.
#[derive(Debug)]
pub struct TestService {
    token: Reply,
    listing: Reply,
    requests: Mutex<Vec<SentRequest>>,
}

impl TestService {
    pub fn new() -> Self {
        Self {
            token: Reply::status(500),
            listing: Reply::status(500),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn token(mut self, reply: Reply) -> Self {
        self.token = reply;
        self
    }

    pub fn listing(mut self, reply: Reply) -> Self {
        self.listing = reply;
        self
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests.lock().expect("poisoned request log").clone()
    }

    fn record(&self, request: SentRequest) {
        self.requests
            .lock()
            .expect("poisoned request log")
            .push(request);
    }
}

impl Service for TestService {
    async fn post_access_token(
        &self,
        credentials: &Credentials,
        headers: &RequestHeaders,
    ) -> HTTPResult<String> {
        self.record(SentRequest {
            url: TOKEN_URL.to_string(),
            headers: headers.clone(),
            basic_auth: Some((
                credentials.client_id().to_string(),
                credentials.client_secret().to_string(),
            )),
            params: password_grant(credentials)
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });
        self.token.clone().into_result()
    }

    async fn get_listing(
        &self,
        request: &ListingRequest,
        headers: &RequestHeaders,
    ) -> HTTPResult<String> {
        self.record(SentRequest {
            url: request.url().to_string(),
            headers: headers.clone(),
            basic_auth: None,
            params: request.params().to_vec(),
        });
        self.listing.clone().into_result()
    }
}

pub struct FrozenClock {
    datetime: DateTime<FixedOffset>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime =
            DateTime::parse_from_rfc3339("2025-05-23T10:13:00-07:00").expect("invalid date supplied");
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.datetime
    }
}
