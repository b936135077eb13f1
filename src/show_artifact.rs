//! Fetch a pipeline deployment artifact from S3 and print its contents.

mod common;

use aws_config::BehaviorVersion;
use tracing::info;

use crate::common::errors::Error;

const ARTIFACT_BUCKET_DEFAULT: &str =
    "devopscicdpipelinestack-devopsdemopipelineartifac-m2uvtnu360mq";
const ARTIFACT_KEY_DEFAULT: &str = "DevOpsDemoPipeline/PreProduct/anx036s";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let bucket = std::env::var("ARTIFACT_BUCKET").unwrap_or(ARTIFACT_BUCKET_DEFAULT.into());
    let key = std::env::var("ARTIFACT_KEY").unwrap_or(ARTIFACT_KEY_DEFAULT.into());

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_client = aws_sdk_s3::Client::new(&config);

    info!("fetching s3://{}/{}", bucket, key);
    let object = s3_client
        .get_object()
        .bucket(&bucket)
        .key(&key)
        .send()
        .await
        .map_err(Box::new)?;

    let bytes = object.body.collect().await.map_err(Box::new)?.into_bytes();
    let content = String::from_utf8(bytes.to_vec())?;
    println!("{content}");

    Ok(())
}
