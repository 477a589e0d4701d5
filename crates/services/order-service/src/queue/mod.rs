//! Message queue abstraction and the queue components built at startup.
//!
//! Handlers only see [`OrderPublisher`], which wraps a [`MessageQueue`]. The
//! SQS implementation exists only when the `dev` profile is active; under any
//! other profile [`QueueBeans`] is empty and publishing is refused.

mod sqs;

pub use sqs::{dev_sqs_client, SqsQueue};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use common::{AppError, AppResult, Profiles, QueueConfig};
use domain::OrderEvent;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Acknowledgement returned by the queue for one sent message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageReceipt {
    pub message_id: Option<String>,
}

/// A queue that accepts text messages.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Send `body` to the queue at `queue_url`
    async fn send(&self, queue_url: &str, body: &str) -> AppResult<MessageReceipt>;
}

/// Publishes order events as JSON to a single queue.
#[derive(Clone)]
pub struct OrderPublisher {
    queue: Arc<dyn MessageQueue>,
    queue_url: String,
}

impl OrderPublisher {
    pub fn new(queue: Arc<dyn MessageQueue>, queue_url: impl Into<String>) -> Self {
        Self {
            queue,
            queue_url: queue_url.into(),
        }
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    pub async fn publish(&self, event: &OrderEvent) -> AppResult<MessageReceipt> {
        let body = serde_json::to_string(event).map_err(|e| AppError::internal(e.to_string()))?;
        debug!(order_id = %event.order_id, queue_url = %self.queue_url, "Sending order event");
        self.queue.send(&self.queue_url, &body).await
    }
}

/// Queue components that exist for the active profiles.
#[derive(Clone, Default)]
pub struct QueueBeans {
    publisher: Option<OrderPublisher>,
}

impl QueueBeans {
    /// Build the SQS publisher when `dev` is active, nothing otherwise.
    ///
    /// Under `dev` both a region and a queue URL must be configured.
    pub fn build(profiles: &Profiles, config: &QueueConfig) -> AppResult<Self> {
        let Some(client) = dev_sqs_client(profiles, config)? else {
            info!(profiles = %profiles, "SQS client not created for the active profiles");
            return Ok(Self::disabled());
        };

        let queue_url = config.queue_url.clone().ok_or_else(|| {
            AppError::configuration("ORDER_SERVICE_QUEUE_URL must be set under the dev profile")
        })?;

        info!(queue_url = %queue_url, "SQS client created");
        Ok(Self::with_publisher(OrderPublisher::new(
            Arc::new(SqsQueue::new(client)),
            queue_url,
        )))
    }

    pub fn disabled() -> Self {
        Self { publisher: None }
    }

    pub fn with_publisher(publisher: OrderPublisher) -> Self {
        Self {
            publisher: Some(publisher),
        }
    }

    pub fn publisher(&self) -> Option<&OrderPublisher> {
        self.publisher.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.publisher.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::OrderEventKind;
    use mockall::predicate::*;

    fn event() -> OrderEvent {
        OrderEvent {
            order_id: "ord-7".to_string(),
            user_login: "jdoe".to_string(),
            amount_cents: 990,
            kind: OrderEventKind::Created,
        }
    }

    #[tokio::test]
    async fn test_publish_sends_json_to_configured_url() {
        let mut queue = MockMessageQueue::new();
        queue
            .expect_send()
            .with(
                eq("https://sqs.eu-west-1.amazonaws.com/123/orders"),
                function(|body: &str| {
                    let json: serde_json::Value = serde_json::from_str(body).unwrap();
                    json["orderId"] == "ord-7" && json["kind"] == "CREATED"
                }),
            )
            .times(1)
            .returning(|_, _| {
                Ok(MessageReceipt {
                    message_id: Some("m-1".to_string()),
                })
            });

        let publisher = OrderPublisher::new(
            Arc::new(queue),
            "https://sqs.eu-west-1.amazonaws.com/123/orders",
        );
        let receipt = publisher.publish(&event()).await.unwrap();

        assert_eq!(receipt.message_id.as_deref(), Some("m-1"));
    }

    #[tokio::test]
    async fn test_publish_propagates_queue_errors() {
        let mut queue = MockMessageQueue::new();
        queue
            .expect_send()
            .returning(|_, _| Err(AppError::queue("throttled")));

        let publisher = OrderPublisher::new(Arc::new(queue), "q");
        let result = publisher.publish(&event()).await;

        tokio_test::assert_err!(&result);
        assert!(matches!(result, Err(AppError::Queue(_))));
    }

    #[test]
    fn test_beans_empty_outside_dev() {
        let config = QueueConfig {
            region: Some("eu-west-1".to_string()),
            queue_url: Some("q".to_string()),
        };

        for raw in ["", "prod", "DEV", "development", "default,test"] {
            let beans = QueueBeans::build(&Profiles::parse(raw), &config).unwrap();
            assert!(!beans.is_enabled(), "profiles {:?}", raw);
        }
    }

    #[tokio::test]
    async fn test_dev_requires_queue_url() {
        let config = QueueConfig {
            region: Some("eu-west-1".to_string()),
            queue_url: None,
        };

        let result = QueueBeans::build(&Profiles::parse("dev"), &config);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_dev_builds_publisher() {
        let config = QueueConfig {
            region: Some("eu-west-1".to_string()),
            queue_url: Some("https://sqs.eu-west-1.amazonaws.com/123/orders".to_string()),
        };

        let beans = QueueBeans::build(&Profiles::parse("dev"), &config).unwrap();
        let publisher = beans.publisher().unwrap();
        assert_eq!(
            publisher.queue_url(),
            "https://sqs.eu-west-1.amazonaws.com/123/orders"
        );
    }
}
