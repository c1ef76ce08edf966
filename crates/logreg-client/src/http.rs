//! Shared HTTP response helpers for the registry client.
//!
//! Centralizes the status-code check (non-success → [`ClientError::Status`])
//! and the diagnostic it emits, so the request methods stay focused on
//! request construction and response decoding.

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. A non-2xx response is logged
/// with its status and body before [`ClientError::Status`] is returned; the
/// wrapper never swallows a failure silently, and never retries.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::error!(status = status.as_u16(), %body, "registry returned an error response");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_maps_status_and_body() {
        let resp = mock_response(404, "schema not found");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "schema not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }
}
