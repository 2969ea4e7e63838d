use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use mds_types::{MdsCredentials, UpstreamError};

pub fn build_url(base_url: &str, operation: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), operation)
}

pub fn build_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
    headers
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Send one request and decode the typed response.
///
/// Single attempt: no fallback endpoints and no retries.
pub async fn execute<Req, Resp>(
    client: &Client,
    base_url: &str,
    operation: &str,
    credentials: &MdsCredentials,
    request: &Req,
) -> Result<Resp, UpstreamError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let url = build_url(base_url, operation);

    let response = client
        .post(&url)
        .headers(build_headers())
        .basic_auth(credentials.qualified_username(), Some(&credentials.password))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("MDS request failed at {}: {}", url, e);
            UpstreamError::Transport { operation: operation.to_string(), message: e.to_string() }
        })?;

    let status = response.status();

    if is_auth_failure(status) {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!("MDS {} refused credentials with {}", operation, status);
        return Err(UpstreamError::AuthenticationFailed {
            operation: operation.to_string(),
            status: status.as_u16(),
            message,
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("MDS {} returned {}", operation, status);
        return Err(UpstreamError::Rejected {
            operation: operation.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    tracing::debug!("MDS request succeeded | Operation: {} | Status: {}", operation, status);

    response.json::<Resp>().await.map_err(|e| UpstreamError::InvalidResponse {
        operation: operation.to_string(),
        message: e.to_string(),
    })
}
