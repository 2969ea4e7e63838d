//! Remote MDS service configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::enums::SearchTermQuoting;

const REDACTED: &str = "********";

/// Windows-style credential triple used to authenticate to the MDS service.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct MdsCredentials {
    /// Logon domain, may be empty
    #[serde(default)]
    pub domain: String,
    #[validate(length(min = 1_u64))]
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl MdsCredentials {
    /// Account name as sent to the service: `DOMAIN\user`, or `user` without a domain.
    pub fn qualified_username(&self) -> String {
        if self.domain.is_empty() {
            self.username.clone()
        } else {
            format!("{}\\{}", self.domain, self.username)
        }
    }

    /// Copy with the password replaced, safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            username: self.username.clone(),
            password: if self.password.is_empty() { String::new() } else { REDACTED.to_string() },
        }
    }
}

impl fmt::Debug for MdsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdsCredentials")
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Connection settings for the remote MDS service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct MdsServiceConfig {
    /// Base URL of the service endpoint
    #[validate(url)]
    pub service_url: String,
    #[serde(default)]
    #[validate(nested)]
    pub credentials: MdsCredentials,
    /// Transport timeout in seconds
    #[validate(range(min = 1_u64, max = 3600_u64))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    #[serde(default)]
    pub search_term_quoting: SearchTermQuoting,
}

impl Default for MdsServiceConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost/MDS/service/service.svc".to_string(),
            credentials: MdsCredentials::default(),
            request_timeout: default_request_timeout(),
            search_term_quoting: SearchTermQuoting::default(),
        }
    }
}

pub const fn default_request_timeout() -> u64 {
    120
}
