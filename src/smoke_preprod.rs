//! Smoke test run against the pre-production stack before promoting a
//! deployment to production.

mod common;

use crate::common::errors::Error;
use crate::common::smoke::SmokeTarget;

const STACK_NAME_DEFAULT: &str = "PreProdApplicationStack";
const OUTPUT_KEY_DEFAULT: &str = "UrlPreProd";

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
