use color_eyre::Result;
use serde::Serialize;

use crate::services::newsletter::EmailSender;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const FROM_ADDRESS: &str = "Selfsight <hello@selfsight.app>";

#[derive(Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

/// Sends newsletter email via the Resend API.
///
/// Without an API key the sender reports disabled and the newsletter
/// service activates subscribers immediately instead of running the
/// confirmation round-trip (dev mode).
#[derive(Clone)]
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl ResendEmailSender {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn send(&self, to_email: &str, subject: &str, html: String) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            color_eyre::eyre::bail!("email sending is not configured");
        };

        let body = SendEmailRequest {
            from: FROM_ADDRESS.to_string(),
            to: vec![to_email.to_string()],
            subject: subject.to_string(),
            html,
        };

        let resp = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("Resend API error: {status} - {text}");
            color_eyre::eyre::bail!("Resend API returned {status}");
        }

        Ok(())
    }
}

impl EmailSender for ResendEmailSender {
    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send_confirmation_email(&self, to_email: &str, confirm_url: &str) -> Result<()> {
        let html = format!(
            r#"<h2>Confirm your subscription</h2>
<p>You asked to join the Selfsight newsletter. Click the link below to confirm:</p>
<p><a href="{confirm_url}">{confirm_url}</a></p>
<p>This link expires in 7 days. If you did not sign up, ignore this email and nothing happens.</p>"#
        );

        self.send(to_email, "Confirm your Selfsight subscription", html)
            .await?;

        tracing::info!("confirmation email sent to {to_email}");
        Ok(())
    }

    async fn send_welcome_email(&self, to_email: &str, unsubscribe_url: &str) -> Result<()> {
        let html = format!(
            r#"<h2>Welcome to Selfsight</h2>
<p>You are in. Expect one short reflection prompt a week, and nothing else.</p>
<p>If you change your mind, one click does it:</p>
<p><a href="{unsubscribe_url}">Unsubscribe</a></p>
<p>That link stays valid for 30 days, and every issue carries a fresh one.</p>"#
        );

        self.send(to_email, "Welcome to Selfsight", html).await?;

        tracing::info!("welcome email sent to {to_email}");
        Ok(())
    }
}
