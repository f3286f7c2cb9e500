//! Canned geolocation lookups and a non-sleeping sleeper
//!
//! Both share a [`CallLog`] so tests can check where pauses fall relative
//! to lookups.

use async_trait::async_trait;
use proxygeo_common::Location;
use proxygeo_enrich::{GeoLookup, LookupError, Sleeper};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One observed interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Lookup(String),
    Pause(Duration),
}

/// Ordered record of lookups and pauses
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Lookup(host) => Some(host),
                Call::Pause(_) => None,
            })
            .collect()
    }

    /// Host looked up right after each pause
    pub fn hosts_after_pauses(&self) -> Vec<String> {
        let calls = self.calls();
        calls
            .windows(2)
            .filter_map(|pair| match pair {
                [Call::Pause(_), Call::Lookup(host)] => Some(host.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn pause_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Pause(_)))
            .count()
    }
}

/// Response a [`MockLookup`] gives for a host
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Location),
    Unresolved,
    NetworkError,
    HttpError(u16),
}

/// Lookup answering from a table, with a fallback for unknown hosts
pub struct MockLookup {
    responses: HashMap<String, MockResponse>,
    fallback: MockResponse,
    log: CallLog,
}

impl MockLookup {
    pub fn new(log: CallLog) -> Self {
        Self {
            responses: HashMap::new(),
            fallback: MockResponse::Unresolved,
            log,
        }
    }

    /// Every unknown host resolves to `location`
    pub fn always(log: CallLog, location: Location) -> Self {
        Self {
            responses: HashMap::new(),
            fallback: MockResponse::Success(location),
            log,
        }
    }

    pub fn with(mut self, host: &str, response: MockResponse) -> Self {
        self.responses.insert(host.to_string(), response);
        self
    }
}

#[async_trait]
impl GeoLookup for MockLookup {
    async fn lookup(&self, host: &str) -> Result<Location, LookupError> {
        self.log.push(Call::Lookup(host.to_string()));

        match self.responses.get(host).unwrap_or(&self.fallback) {
            MockResponse::Success(location) => Ok(location.clone()),
            MockResponse::Unresolved => Err(LookupError::ResolutionFailed {
                host: host.to_string(),
                status: "fail".to_string(),
            }),
            MockResponse::NetworkError => {
                Err(LookupError::Network("connection refused".to_string()))
            }
            MockResponse::HttpError(code) => Err(LookupError::Http(*code)),
        }
    }
}

/// Sleeper that records the requested pause and returns immediately
#[derive(Clone)]
pub struct RecordingSleeper {
    log: CallLog,
}

impl RecordingSleeper {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.log.push(Call::Pause(duration));
    }
}

pub fn location(country: &str, city: &str, isp: &str) -> Location {
    Location {
        country: Some(country.to_string()),
        city: Some(city.to_string()),
        isp: Some(isp.to_string()),
    }
}
