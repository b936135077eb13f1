//! Backend for the `/book` API: echoes the invocation event back in an
//! API Gateway proxy response.

use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Response {
    #[serde(rename = "statusCode")]
    status_code: u16,
    headers: CorsHeaders,
    body: String,
}

#[derive(Debug, Serialize)]
struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    allow_origin: &'static str,
    #[serde(rename = "Access-Control-Allow-Headers")]
    allow_headers: &'static str,
    #[serde(rename = "Access-Control-Allow-Methods")]
    allow_methods: &'static str,
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: "*",
            allow_headers: "Content-Type",
            allow_methods: "OPTIONS,GET",
        }
    }
}

#[derive(Debug, Serialize)]
struct Body {
    message: String,
}

fn echo_response(event: &Value) -> Result<Response, serde_json::Error> {
    Ok(Response {
        status_code: 200,
        headers: CorsHeaders::default(),
        body: serde_json::to_string(&Body {
            message: event.to_string(),
        })?,
    })
}

async fn handler(event: LambdaEvent<Value>) -> Result<Response, LambdaError> {
    Ok(echo_response(&event.payload)?)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    run(service_fn(handler)).await
}
