//! Shared request plumbing for the generation clients.

use reqwest::Client;
use vitrine::retry::{with_retry, RetryPolicy};
use vitrine::{Error, Result};

use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// POST a generateContent request under the retry policy.
///
/// Transport failures and non-success statuses are retried; the response
/// body is parsed once, after a successful attempt.
pub(crate) async fn post_generate(
    client: &Client,
    url: &str,
    request: &GenerateContentRequest,
    policy: &RetryPolicy,
) -> Result<GenerateContentResponse> {
    let response = with_retry(policy, || async {
        let response = client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ResponseStatus(status.as_u16()));
        }
        Ok(response)
    })
    .await?;

    response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| Error::InvalidResponse(format!("failed to parse response JSON: {e}")))
}
