//! Per-light log of API exchanges, kept for diagnostics.

use std::collections::VecDeque;
use std::time::Instant;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One request to the vendor and what came back.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// Method and path, e.g. `GET /v1.0/devices/lamp-1`
    pub endpoint: String,
    pub request: Value,
    /// `None` when no response arrived.
    pub status: Option<u16>,
    pub response: Option<Value>,
    pub error: Option<String>,
    /// Seconds since the log was created
    pub timestamp: f64,
}

impl Exchange {
    pub fn is_rejected(&self) -> bool {
        self.status.is_some_and(|status| status >= 400)
    }
}

/// Bounded exchange log. Old entries are dropped first; the counters keep
/// counting across evictions.
#[derive(Debug, Clone)]
pub struct ExchangeLog {
    entries: VecDeque<Exchange>,
    capacity: usize,
    start_time: Instant,
    requests: usize,
    rejected: usize,
    failed: usize,
    last_error: Option<String>,
}

impl Default for ExchangeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeLog {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ExchangeLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            start_time: Instant::now(),
            requests: 0,
            rejected: 0,
            failed: 0,
            last_error: None,
        }
    }

    /// Records an exchange that got an HTTP response.
    pub fn record_response(
        &mut self,
        endpoint: &str,
        request: Value,
        status: StatusCode,
        response: Value,
    ) {
        if status.as_u16() >= 400 {
            self.rejected += 1;
        }
        self.push(Exchange {
            endpoint: endpoint.to_string(),
            request,
            status: Some(status.as_u16()),
            response: Some(response),
            error: None,
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });
    }

    /// Records a request that never produced a response.
    pub fn record_failure(&mut self, endpoint: &str, request: Value, error: &str) {
        self.failed += 1;
        self.last_error = Some(error.to_string());
        self.push(Exchange {
            endpoint: endpoint.to_string(),
            request,
            status: None,
            response: None,
            error: Some(error.to_string()),
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });
    }

    /// Notes an error found after the exchange completed.
    pub fn record_error(&mut self, error: &str) {
        self.last_error = Some(error.to_string());
    }

    fn push(&mut self, exchange: Exchange) {
        self.requests += 1;
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(exchange);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Most recent exchange with the given endpoint still in the log.
    pub fn latest(&self, endpoint: &str) -> Option<&Exchange> {
        self.entries.iter().rev().find(|e| e.endpoint == endpoint)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Exchange> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.requests = 0;
        self.rejected = 0;
        self.failed = 0;
        self.last_error = None;
    }

    pub fn summary(&self) -> ExchangeSummary {
        ExchangeSummary {
            requests: self.requests,
            rejected: self.rejected,
            failed: self.failed,
            total_entries: self.entries.len(),
            last_status: self.entries.iter().rev().find_map(|e| e.status),
            last_error: self.last_error.clone(),
        }
    }
}

/// Counters over everything recorded since the last clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSummary {
    pub requests: usize,
    /// Answered with status 400 or above
    pub rejected: usize,
    /// No response (connect, TLS, timeout)
    pub failed: usize,
    pub total_entries: usize,
    pub last_status: Option<u16>,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ACTION: &str = "POST /v1.0/user/devices/action";

    #[test]
    fn test_record_response() {
        let mut log = ExchangeLog::new();
        log.record_response(
            ACTION,
            json!({"payload": {"devices": []}}),
            StatusCode::OK,
            json!({"status": "ok"}),
        );
        log.record_response(ACTION, Value::Null, StatusCode::INTERNAL_SERVER_ERROR, json!("oops"));

        let latest = log.latest(ACTION).unwrap();
        assert_eq!(latest.status, Some(500));
        assert!(latest.is_rejected());

        let summary = log.summary();
        assert_eq!(summary.requests, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.last_status, Some(500));
    }

    #[test]
    fn test_record_failure() {
        let mut log = ExchangeLog::new();
        log.record_failure("GET /v1.0/devices/lamp-1", Value::Null, "connection refused");

        let latest = log.latest("GET /v1.0/devices/lamp-1").unwrap();
        assert_eq!(latest.status, None);
        assert!(!latest.is_rejected());
        assert_eq!(log.last_error(), Some("connection refused"));
        assert_eq!(log.summary().failed, 1);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.summary().requests, 0);
        assert!(log.last_error().is_none());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ExchangeLog::with_capacity(2);
        for i in 0..5 {
            log.record_response(
                &format!("GET /v1.0/devices/{}", i),
                Value::Null,
                StatusCode::OK,
                json!({"status": "ok"}),
            );
        }

        assert_eq!(log.len(), 2);
        let endpoints: Vec<&str> = log.entries().map(|e| e.endpoint.as_str()).collect();
        assert_eq!(endpoints, vec!["GET /v1.0/devices/3", "GET /v1.0/devices/4"]);
        assert!(log.latest("GET /v1.0/devices/0").is_none());
        assert_eq!(log.summary().requests, 5);
    }
}
