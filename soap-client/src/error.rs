//! Error types for the SOAP client

use thiserror::Error;

/// Errors that can occur while delivering a SOAP action to a device
///
/// Every variant means the action was not accepted: the device could not be
/// reached, answered with a non-2xx status, or sent a reply too large to
/// be a SOAP response.
#[derive(Debug, Error)]
pub enum SoapError {
    /// Connection failure or an unreadable response body
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device did not answer within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-2xx HTTP status without a UPnP error body
    #[error("HTTP status {0}")]
    Status(u16),

    /// The device answered 2xx but the body exceeded the size cap
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: u64 },

    /// Non-2xx HTTP status carrying a UPnP fault
    #[error("SOAP fault: error code {code}{}", fault_suffix(.description))]
    Fault {
        code: u16,
        description: Option<String>,
    },
}

impl SoapError {
    /// Whether this error was caused by the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, SoapError::Timeout(_))
    }
}

fn fault_suffix(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display_with_description() {
        let err = SoapError::Fault {
            code: 701,
            description: Some("Transition not available".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "SOAP fault: error code 701 (Transition not available)"
        );
    }

    #[test]
    fn test_fault_display_without_description() {
        let err = SoapError::Fault {
            code: 500,
            description: None,
        };
        assert_eq!(err.to_string(), "SOAP fault: error code 500");
    }

    #[test]
    fn test_body_too_large_display() {
        let err = SoapError::BodyTooLarge { limit: 1024 };
        assert_eq!(err.to_string(), "Response body exceeds 1024 bytes");
    }

    #[test]
    fn test_is_timeout() {
        assert!(SoapError::Timeout("read".to_string()).is_timeout());
        assert!(!SoapError::Status(404).is_timeout());
        assert!(!SoapError::BodyTooLarge { limit: 1 }.is_timeout());
    }
}
