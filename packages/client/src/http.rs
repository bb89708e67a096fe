//! HTTP plumbing: client construction and JSON request helpers.
//!
//! Every submission is a single attempt. Failures surface immediately so
//! the user can resubmit; there is no retry or backoff.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{ClientError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("legalease-client/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// POST a JSON body and deserialize the JSON response.
///
/// A non-2xx status is mapped to [`ClientError::Service`] carrying the
/// response body as the message.
pub async fn post_json<B, T>(client: &Client, url: &str, body: &B) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    tracing::debug!(url, "POST");
    let response = client.post(url).json(body).send().await?;
    read_json(response).await
}

/// POST without a body and deserialize the JSON response.
pub async fn post_empty<T>(client: &Client, url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    tracing::debug!(url, "POST");
    let response = client.post(url).send().await?;
    read_json(response).await
}

/// GET a URL and deserialize the JSON response.
pub async fn get_json<T>(client: &Client, url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    tracing::debug!(url, "GET");
    let response = client.get(url).send().await?;
    read_json(response).await
}

async fn read_json<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "service returned an error");
        return Err(ClientError::service(status.as_u16(), &body));
    }

    Ok(response.json().await?)
}
