//! The SQS client must exist under `dev` and nowhere else.

use common::{AppError, Profiles, QueueConfig};
use order_service_lib::queue::{dev_sqs_client, QueueBeans};

fn queue_config() -> QueueConfig {
    QueueConfig {
        region: Some("eu-central-1".to_string()),
        queue_url: Some("https://sqs.eu-central-1.amazonaws.com/000000000000/orders".to_string()),
    }
}

#[tokio::test]
async fn test_exactly_one_client_under_dev() {
    let profiles = Profiles::parse("dev");

    let client = dev_sqs_client(&profiles, &queue_config()).unwrap();
    assert!(client.is_some());

    let beans = QueueBeans::build(&profiles, &queue_config()).unwrap();
    assert!(beans.is_enabled());
}

#[test]
fn test_no_client_under_other_profiles() {
    for raw in ["", "default", "prod", "staging,test", "DEV", "dev-local"] {
        let profiles = Profiles::parse(raw);
        assert!(dev_sqs_client(&profiles, &queue_config()).unwrap().is_none());
        assert!(!QueueBeans::build(&profiles, &queue_config())
            .unwrap()
            .is_enabled());
    }
}

#[test]
fn test_other_profiles_ignore_missing_settings() {
    let beans = QueueBeans::build(&Profiles::parse("prod"), &QueueConfig::default()).unwrap();
    assert!(beans.publisher().is_none());
}

#[test]
fn test_dev_without_region_fails() {
    let config = QueueConfig {
        region: None,
        ..queue_config()
    };

    let result = QueueBeans::build(&Profiles::parse("dev"), &config);
    assert!(matches!(result, Err(AppError::Configuration(_))));
}
