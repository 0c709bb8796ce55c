//! RequestLog - Captured Requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mock::HttpMethod;

/// A request seen by the mock server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedRequest {
    pub id: String,
    pub method: HttpMethod,
    pub url: String,
    /// Response status sent back
    pub status: u16,
    pub timestamp: DateTime<Utc>,
    /// Mock that answered the request, if any
    pub mock_id: Option<String>,
}

impl LoggedRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, status: u16) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method,
            url: url.into(),
            status,
            timestamp: Utc::now(),
            mock_id: None,
        }
    }

    /// Client or server error status
    pub fn is_error(&self) -> bool {
        is_error_status(self.status)
    }

    pub fn is_mocked(&self) -> bool {
        self.mock_id.is_some()
    }
}

/// Statuses in `400..600` are shown as failures
pub fn is_error_status(status: u16) -> bool {
    (400..600).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_range() {
        assert!(!is_error_status(200));
        assert!(!is_error_status(399));
        assert!(is_error_status(400));
        assert!(is_error_status(503));
        assert!(!is_error_status(600));
    }

    #[test]
    fn new_request_is_unmocked() {
        let request = LoggedRequest::new(HttpMethod::Post, "/login", 401);
        assert!(request.is_error());
        assert!(!request.is_mocked());
        assert!(!request.id.is_empty());
    }
}
