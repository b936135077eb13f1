use aws_config::BehaviorVersion;
use reqwest::StatusCode;
use tracing::{error, info};

use crate::common::errors::Error;
use crate::common::outputs::query_stack_output;
use crate::common::ENDPOINT_DEFAULT;

/// One smoke-test run: which stack exposes the API URL, under which output
/// key, and which endpoint to hit.
pub struct SmokeTarget {
    pub stack_name: String,
    pub output_key: String,
    pub endpoint: String,
}

impl SmokeTarget {
    pub fn from_env(stack_name_default: &str, output_key_default: &str) -> Self {
        Self {
            stack_name: std::env::var("STACK_NAME").unwrap_or(stack_name_default.into()),
            output_key: std::env::var("OUTPUT_KEY").unwrap_or(output_key_default.into()),
            endpoint: std::env::var("ENDPOINT").unwrap_or(ENDPOINT_DEFAULT.into()),
        }
    }

    /// Resolve the API URL from the stack outputs, then probe the endpoint.
    pub async fn run(&self) -> Result<(), Error> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let cfn_client = aws_sdk_cloudformation::Client::new(&config);

        let api_url =
            query_stack_output(&cfn_client, &self.stack_name, &self.output_key).await?;

        let http_client = reqwest::Client::new();
        probe(&http_client, &api_url, &self.endpoint).await
    }
}

/// GET `{base_url}/{endpoint}` and require a 200.
pub async fn probe(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
) -> Result<(), Error> {
    let url = endpoint_url(base_url, endpoint);
    info!("GET {}", url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    info!("{}", body);

    expect_ok(&url, status)
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
}

fn expect_ok(url: &str, status: StatusCode) -> Result<(), Error> {
    if status != StatusCode::OK {
        error!("unexpected status {} from {}", status, url);
        return Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_endpoint() {
        assert_eq!(
            endpoint_url("https://api.example.com", "book"),
            "https://api.example.com/book"
        );
        // API Gateway stage URLs come with a trailing slash
        assert_eq!(
            endpoint_url("https://api.example.com/prod/", "book"),
            "https://api.example.com/prod/book"
        );
    }

    #[test]
    fn only_200_passes() {
        assert!(expect_ok("https://api.example.com/book", StatusCode::OK).is_ok());

        for status in [
            StatusCode::CREATED,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = expect_ok("https://api.example.com/book", status).unwrap_err();
            assert!(matches!(err, Error::UnexpectedStatus { .. }));
        }
    }
}
