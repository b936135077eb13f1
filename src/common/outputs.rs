use aws_sdk_cloudformation::types::Output;
use aws_sdk_cloudformation::Client;
use tracing::info;

use crate::common::errors::Error;

/// Value of the output whose key equals `key`, if the stack declares one.
pub fn find_output<'a>(outputs: &'a [Output], key: &str) -> Option<&'a str> {
    outputs
        .iter()
        .find(|output| output.output_key() == Some(key))
        .and_then(|output| output.output_value())
}

/// Look up a single output of a deployed CloudFormation stack.
///
/// A stack that is missing, has no outputs, or has no output named `key`
/// is reported as [`Error::MissingOutput`] rather than left to fail on
/// whatever uses the value next.
pub async fn query_stack_output(
    client: &Client,
    stack_name: &str,
    key: &str,
) -> Result<String, Error> {
    let resp = client
        .describe_stacks()
        .stack_name(stack_name)
        .send()
        .await
        .map_err(Box::new)?;

    let value = resp
        .stacks()
        .first()
        .map(|stack| stack.outputs())
        .and_then(|outputs| find_output(outputs, key))
        .ok_or_else(|| Error::MissingOutput {
            stack: stack_name.to_string(),
            key: key.to_string(),
        })?;

    info!("stack output {}: {}", key, value);
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(key: &str, value: &str) -> Output {
        Output::builder().output_key(key).output_value(value).build()
    }

    #[test]
    fn finds_matching_output() {
        let outputs = vec![
            output("UrlPreProd", "https://preprod.example.com"),
            output("Url", "https://example.com"),
        ];
        assert_eq!(
            find_output(&outputs, "Url"),
            Some("https://example.com")
        );
        assert_eq!(
            find_output(&outputs, "UrlPreProd"),
            Some("https://preprod.example.com")
        );
    }

    #[test]
    fn missing_key_yields_none() {
        let outputs = vec![output("Url", "https://example.com")];
        assert_eq!(find_output(&outputs, "UrlPreProd"), None);
        assert_eq!(find_output(&[], "Url"), None);
    }

    #[test]
    fn output_without_value_yields_none() {
        let outputs = vec![Output::builder().output_key("Url").build()];
        assert_eq!(find_output(&outputs, "Url"), None);
    }
}
