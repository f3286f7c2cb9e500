//! Test Helper Utilities
//!
//! Shared utilities for testing proxygeo-enrich

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod log_capture;
pub mod mock_services;

pub use log_capture::{capture_logs, LogCapture};
pub use mock_services::{location, Call, CallLog, MockLookup, MockResponse, RecordingSleeper};
