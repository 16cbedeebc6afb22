use crate::core::SnapError;

/// Fail with [`SnapError::Status`] unless the response carries a 2xx status.
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, SnapError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(SnapError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        })
    }
}

/// Read the response body as text, tracing its size per endpoint.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, SnapError> {
    let text = resp.text().await?;
    tracing::trace!(endpoint, symbol, bytes = text.len(), "response body received");
    Ok(text)
}
