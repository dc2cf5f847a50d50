//! Best-effort forwarding of accepted inquiries to the partner webhook.
//!
//! The POST runs on its own tokio task with a bounded timeout. The calling
//! handler awaits the task, but a slow or dead destination never ties up the
//! request-processing path of other requests.

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};
use url::Url;

use super::types::{DeliveryError, DeliveryResult};
use crate::intake::InquiryRecord;
use crate::Config;

/// Webhook forwarder. Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct PartnerHub {
    client: Client,
    url: Option<String>,
    timeout: Duration,
}

impl PartnerHub {
    /// Build a forwarder for `url`. `None` disables forwarding.
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .user_agent(concat!("otogo-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DeliveryError> {
        Self::new(config.partner_webhook_url.clone(), config.webhook_timeout())
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Forward a record and report what happened. Never fails.
    pub async fn forward(&self, record: &InquiryRecord) -> DeliveryResult {
        let Some(url) = self.url.as_deref() else {
            info!(
                reference_id = %record.reference_id(),
                "partner_webhook_not_configured"
            );
            return DeliveryResult::not_configured();
        };

        match self.deliver(url, record).await {
            Ok(status_code) => {
                info!(
                    reference_id = %record.reference_id(),
                    status_code = status_code,
                    "partner_webhook_delivered"
                );
                DeliveryResult::Delivered { status_code }
            }
            Err(e) => {
                error!(
                    reference_id = %record.reference_id(),
                    is_timeout = e.is_timeout(),
                    timeout_seconds = self.timeout.as_secs_f64(),
                    error = %e,
                    "partner_webhook_delivery_failed"
                );
                DeliveryResult::NotDelivered {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// POST the record on a spawned task and return the success status code.
    async fn deliver(&self, url: &str, record: &InquiryRecord) -> Result<u16, DeliveryError> {
        let url = Url::parse(url)?;

        info!(
            reference_id = %record.reference_id(),
            host = url.host_str().unwrap_or_default(),
            "partner_webhook_delivery_starting"
        );

        let request = self.client.post(url).timeout(self.timeout).json(record);

        let task = tokio::spawn(async move {
            let response = request.send().await?.error_for_status()?;
            Ok::<_, reqwest::Error>(response.status().as_u16())
        });

        Ok(task.await??)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::BusinessInquiry;

    fn record() -> InquiryRecord {
        InquiryRecord::new(BusinessInquiry {
            owner_name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            phone: "555-0100".to_string(),
            business_name: "Sparkle".to_string(),
            business_type: "Wash".to_string(),
            locations: None,
            website: None,
            message: "Hello".to_string(),
        })
    }

    #[tokio::test]
    async fn test_forward_without_url_is_not_configured() {
        let hub = PartnerHub::new(None, Duration::from_secs(10)).unwrap();
        assert!(!hub.is_configured());

        let result = hub.forward(&record()).await;
        assert_eq!(result, DeliveryResult::not_configured());
    }

    #[tokio::test]
    async fn test_forward_with_invalid_url_is_not_delivered() {
        let hub = PartnerHub::new(Some("::not a url::".to_string()), Duration::from_secs(1))
            .unwrap();

        let result = hub.forward(&record()).await;
        assert!(!result.is_delivered());
        assert!(result.reason().unwrap().contains("invalid webhook URL"));
    }

    #[tokio::test]
    async fn test_forward_to_closed_port_is_not_delivered() {
        // Port 9 (discard) on loopback is practically never listening.
        let hub = PartnerHub::new(
            Some("http://127.0.0.1:9/hook".to_string()),
            Duration::from_secs(2),
        )
        .unwrap();

        let result = hub.forward(&record()).await;
        assert!(!result.is_delivered());
        assert!(!result.reason().unwrap().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            partner_webhook_url: Some("https://hub.example.com/inquiries".to_string()),
            ..Config::default()
        };

        let hub = PartnerHub::from_config(&config).unwrap();
        assert!(hub.is_configured());
        assert_eq!(hub.timeout, Duration::from_secs(10));
    }
}
