use anyhow::Context as _;
use reqwest::StatusCode;

use crate::Validation;

pub fn http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(crate::USER_AGENT)
        .build()
        .with_context(|| "cannot build the http client")
}

/// Sends `request` once and classifies the response.
///
/// Only `200 OK` counts as valid. Any other status becomes
/// [`Validation::Rejected`] carrying the response body, and anything that
/// fails before a status arrives becomes [`Validation::TransportError`].
pub async fn probe(request: reqwest::RequestBuilder) -> Validation {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            log::warn!("request failed: {err}");
            return Validation::TransportError(err.to_string());
        }
    };

    let status = response.status();
    log::debug!("{} responded with {status}", response.url());
    if status == StatusCode::OK {
        return Validation::Valid;
    }

    let detail = match read_body(response).await {
        Ok(body) => render_detail(&body),
        Err(err) => {
            log::warn!("{err:#}");
            String::new()
        }
    };

    Validation::Rejected { status, detail }
}

async fn read_body(response: reqwest::Response) -> anyhow::Result<String> {
    response
        .text()
        .await
        .with_context(|| "cannot read the response body")
}

fn render_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .map(|value| value.to_string())
        .unwrap_or_else(|_| body.trim().to_string())
}
