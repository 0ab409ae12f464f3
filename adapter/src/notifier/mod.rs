use async_trait::async_trait;
use kernel::notifier::{StatusChangeNotice, StatusNotifier};
use shared::config::MailConfig;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Posts status-change mails to an HTTP mail gateway. When no gateway is
/// configured the notice is logged and dropped.
pub struct MailGatewayNotifier {
    client: reqwest::Client,
    gateway_url: Option<String>,
    sender: String,
}

impl MailGatewayNotifier {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway_url: config.gateway_url.clone(),
            sender: config.sender.clone(),
        }
    }
}

#[async_trait]
impl StatusNotifier for MailGatewayNotifier {
    async fn notify(&self, notice: &StatusChangeNotice) -> anyhow::Result<()> {
        let Some(url) = self.gateway_url.as_deref() else {
            tracing::debug!(email = %notice.email, "mail gateway not configured, skipping notification");
            return Ok(());
        };

        let subject = format!("Your booking has been {}", notice.status);
        let body = format!(
            "Hello {},\n\nYour booking for {} on {} {}-{} has been {}.",
            notice.user_name,
            notice.resource_name,
            notice.date,
            notice.start_time,
            notice.end_time,
            notice.status,
        );

        let res = self
            .client
            .post(url)
            .json(&serde_json::json!({
                "from": self.sender,
                "to": notice.email,
                "subject": subject,
                "body": body,
            }))
            .send()
            .await?;

        res.error_for_status()?;
        Ok(())
    }
}

pub fn notification_channel(
    buffer: usize,
) -> (
    mpsc::Sender<StatusChangeNotice>,
    mpsc::Receiver<StatusChangeNotice>,
) {
    mpsc::channel(buffer)
}

/// Drains status-change notices and hands them to the notifier. Delivery
/// errors are logged and swallowed; they never reach the booking flow.
pub async fn run_notification_worker(
    mut rx: mpsc::Receiver<StatusChangeNotice>,
    notifier: Arc<dyn StatusNotifier>,
) {
    while let Some(notice) = rx.recv().await {
        if let Err(e) = notifier.notify(&notice).await {
            tracing::warn!(
                error.cause_chain = ?e,
                email = %notice.email,
                "failed to deliver status change notification"
            );
        }
    }
}
