//! Amazon SQS client, created only under the `dev` profile.

use async_trait::async_trait;
use aws_config::imds::credentials::ImdsCredentialsProvider;
use aws_sdk_sqs::config::{BehaviorVersion, Region};
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client;

use common::{AppError, AppResult, Profiles, QueueConfig};
use domain::PROFILE_DEV;

use super::{MessageQueue, MessageReceipt};

/// Build the async SQS client when the `dev` profile is active.
///
/// The client uses the statically configured region and credentials from the
/// EC2 instance metadata service, which are cached and refreshed by the SDK.
/// Returns `Ok(None)` under every other profile; a missing region under `dev`
/// is a configuration error.
pub fn dev_sqs_client(profiles: &Profiles, config: &QueueConfig) -> AppResult<Option<Client>> {
    if !profiles.accepts(&[PROFILE_DEV]) {
        return Ok(None);
    }

    let region = config.region.clone().ok_or_else(|| {
        AppError::configuration(
            "ORDER_SERVICE_AWS_REGION or CLOUD_AWS_REGION_STATIC must be set under the dev profile",
        )
    })?;

    let sqs_config = aws_sdk_sqs::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(region))
        .credentials_provider(ImdsCredentialsProvider::builder().build())
        .build();

    Ok(Some(Client::from_conf(sqs_config)))
}

/// [`MessageQueue`] backed by an SQS client.
#[derive(Debug, Clone)]
pub struct SqsQueue {
    client: Client,
}

impl SqsQueue {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    async fn send(&self, queue_url: &str, body: &str) -> AppResult<MessageReceipt> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| AppError::queue(DisplayErrorContext(&e).to_string()))?;

        Ok(MessageReceipt {
            message_id: output.message_id().map(str::to_string),
        })
    }
}
