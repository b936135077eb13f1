//! Smoke test run against the production stack after deployment.

mod common;

use crate::common::errors::Error;
use crate::common::smoke::SmokeTarget;

const STACK_NAME_DEFAULT: &str = "ApplicationStack";
const OUTPUT_KEY_DEFAULT: &str = "Url";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    SmokeTarget::from_env(STACK_NAME_DEFAULT, OUTPUT_KEY_DEFAULT)
        .run()
        .await
}
