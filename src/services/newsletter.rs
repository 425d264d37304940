use color_eyre::Result;

use crate::db::models::SubscriberStatus;
use crate::db::Db;
use crate::email::ResendEmailSender;
use crate::names;
use crate::token::{Purpose, TokenError, TokenSigner};

// ---------------------------------------------------------------------------
// SubscriberRepository trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait SubscriberRepository: Send + Sync {
    fn upsert_pending(&self, email: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    fn activate(&self, email: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    fn deactivate(&self, email: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    fn status(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<SubscriberStatus>>> + Send;
}

// ---------------------------------------------------------------------------
// EmailSender trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    /// Whether email sending is configured (false in dev mode).
    fn is_enabled(&self) -> bool;

    fn send_confirmation_email(
        &self,
        to_email: &str,
        confirm_url: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn send_welcome_email(
        &self,
        to_email: &str,
        unsubscribe_url: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

pub enum SubscribeOutcome {
    /// Address failed basic validation.
    InvalidEmail,
    /// Already confirmed; nothing sent.
    AlreadyActive,
    /// Activated on the spot (dev mode, no confirmation round-trip).
    Activated,
    /// Confirmation email sent to the contained address (prod mode).
    ConfirmationSent(String),
    /// Pending row stored but the confirmation email failed.
    EmailFailed,
}

pub enum ConfirmOutcome {
    /// Subscription confirmed for the contained address.
    Activated(String),
    InvalidToken(TokenError),
}

pub enum UnsubscribeOutcome {
    /// Contained address removed from the active list.
    Unsubscribed(String),
    InvalidToken(TokenError),
}

// ---------------------------------------------------------------------------
// NewsletterService
// ---------------------------------------------------------------------------

pub struct NewsletterService<R: SubscriberRepository = Db, E: EmailSender = ResendEmailSender> {
    repo: R,
    email: E,
    tokens: TokenSigner,
    base_url: String,
}

impl<R: SubscriberRepository + Clone, E: EmailSender + Clone> Clone for NewsletterService<R, E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            email: self.email.clone(),
            tokens: self.tokens.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<R: SubscriberRepository, E: EmailSender> NewsletterService<R, E> {
    pub fn new(repo: R, email: E, tokens: TokenSigner, base_url: String) -> Self {
        Self {
            repo,
            email,
            tokens,
            base_url,
        }
    }

    /// Whether the confirmation round-trip is in effect (production mode).
    pub fn email_enabled(&self) -> bool {
        self.email.is_enabled()
    }

    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome> {
        let email = crate::token::normalize_email(email);

        if !is_valid_email(&email) {
            return Ok(SubscribeOutcome::InvalidEmail);
        }

        if self.repo.status(&email).await? == Some(SubscriberStatus::Active) {
            return Ok(SubscribeOutcome::AlreadyActive);
        }

        self.repo.upsert_pending(&email).await?;

        if !self.email_enabled() {
            // Dev mode: no way to deliver a confirmation link
            self.repo.activate(&email).await?;
            tracing::info!("email delivery disabled, subscriber activated immediately: {email}");
            return Ok(SubscribeOutcome::Activated);
        }

        let token = self.tokens.sign(&email, Purpose::Confirm);
        let confirm_url = names::confirm_url(&self.base_url, &token);

        if let Err(e) = self.email.send_confirmation_email(&email, &confirm_url).await {
            tracing::error!("failed to send confirmation email to {email}: {e}");
            return Ok(SubscribeOutcome::EmailFailed);
        }

        Ok(SubscribeOutcome::ConfirmationSent(email))
    }

    pub async fn confirm(&self, token: &str) -> Result<ConfirmOutcome> {
        let email = match self.tokens.verify(token, Purpose::Confirm) {
            Ok(email) => email,
            Err(reason) => return Ok(ConfirmOutcome::InvalidToken(reason)),
        };

        self.repo.activate(&email).await?;

        if self.email_enabled() {
            let unsubscribe_token = self.tokens.sign(&email, Purpose::Unsubscribe);
            let unsubscribe_url = names::unsubscribe_url(&self.base_url, &unsubscribe_token);

            if let Err(e) = self.email.send_welcome_email(&email, &unsubscribe_url).await {
                // Activation already happened; the welcome email is a courtesy.
                tracing::warn!("failed to send welcome email to {email}: {e}");
            }
        }

        Ok(ConfirmOutcome::Activated(email))
    }

    pub async fn unsubscribe(&self, token: &str) -> Result<UnsubscribeOutcome> {
        let email = match self.tokens.verify(token, Purpose::Unsubscribe) {
            Ok(email) => email,
            Err(reason) => return Ok(UnsubscribeOutcome::InvalidToken(reason)),
        };

        self.repo.deactivate(&email).await?;

        Ok(UnsubscribeOutcome::Unsubscribed(email))
    }
}

/// Cheap structural check; the confirmation round-trip is the real
/// validation.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
