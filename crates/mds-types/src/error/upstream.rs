//! Remote service errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while calling the remote MDS service.
///
/// The gateway never interprets remote semantics; these variants only record
/// how the round trip failed so the caller can see the remote outcome.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum UpstreamError {
    /// Network fault, timeout, or connection refused
    #[error("MDS {operation} unreachable: {message}")]
    Transport { operation: String, message: String },

    /// Remote service refused the configured credentials (401/403)
    #[error("MDS {operation} authentication failed ({status}): {message}")]
    AuthenticationFailed { operation: String, status: u16, message: String },

    /// Remote service rejected the request with a non-success status
    #[error("MDS {operation} rejected the request ({status}): {body}")]
    Rejected { operation: String, status: u16, body: String },

    /// Remote service answered 2xx with a body that does not match the contract
    #[error("MDS {operation} returned an invalid response: {message}")]
    InvalidResponse { operation: String, message: String },
}

impl UpstreamError {
    /// Name of the remote operation that failed.
    pub fn operation(&self) -> &str {
        match self {
            Self::Transport { operation, .. }
            | Self::AuthenticationFailed { operation, .. }
            | Self::Rejected { operation, .. }
            | Self::InvalidResponse { operation, .. } => operation,
        }
    }

    /// Get HTTP status code to relay to the gateway's caller.
    ///
    /// Remote rejections keep the remote status when it is an error status;
    /// everything else is a bad gateway.
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Rejected { status, .. } if *status >= 400 && *status <= 599 => *status,
            Self::Rejected { .. }
            | Self::AuthenticationFailed { .. }
            | Self::Transport { .. }
            | Self::InvalidResponse { .. } => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            UpstreamError::Rejected {
                operation: "EntityMembersCreate".to_string(),
                status: 400,
                body: "bad".to_string()
            }
            .http_status_code(),
            400
        );

        assert_eq!(
            UpstreamError::Rejected {
                operation: "EntityMembersCreate".to_string(),
                status: 302,
                body: String::new()
            }
            .http_status_code(),
            502
        );

        assert_eq!(
            UpstreamError::AuthenticationFailed {
                operation: "EntityMembersGet".to_string(),
                status: 401,
                message: "denied".to_string()
            }
            .http_status_code(),
            502
        );
    }

    #[test]
    fn test_operation_name_and_display() {
        let transport = UpstreamError::Transport {
            operation: "EntityMembersDelete".to_string(),
            message: "connection refused".to_string(),
        };

        assert_eq!(transport.operation(), "EntityMembersDelete");
        let msg = transport.to_string();
        assert!(msg.contains("EntityMembersDelete"));
        assert!(msg.contains("connection refused"));
    }
}
