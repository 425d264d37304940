// Stateless signed tokens for newsletter confirm and unsubscribe links.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SECONDS_PER_DAY: i64 = 86_400;

/// What a link token authorizes. The purpose is mixed into the signed
/// payload, so a confirm token can never pass as an unsubscribe token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Confirm,
    Unsubscribe,
}

impl Purpose {
    /// Default validity window for freshly signed tokens.
    pub fn validity_days(self) -> u32 {
        match self {
            Purpose::Confirm => 7,
            Purpose::Unsubscribe => 30,
        }
    }

    fn payload(self, email_b64: &str, expires_at: i64) -> String {
        match self {
            Purpose::Confirm => format!("confirm:{email_b64}.{expires_at}"),
            Purpose::Unsubscribe => format!("{email_b64}.{expires_at}"),
        }
    }
}

/// Why a token was rejected. Rejections form a closed set so views can
/// show the reason without leaking anything about the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Token does not have the three dot-separated segments.
    Malformed,
    /// Expiry segment is missing, not a number, or in the past.
    Expired,
    /// Signature does not match the payload.
    BadSignature,
    /// Signature checked out but the email segment failed to decode.
    Verification,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            TokenError::Malformed => "Malformed token",
            TokenError::Expired => "Token expired",
            TokenError::BadSignature => "Invalid signature",
            TokenError::Verification => "Verification error",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for TokenError {}

/// Signs and verifies the bearer tokens embedded in newsletter emails.
///
/// Wire format is `{base64url(email)}.{expiry}.{base64url(signature)}`
/// with unpadded URL-safe base64, so tokens survive being pasted into a
/// path segment. No server-side state is kept; possession of a token
/// with a valid signature is the whole proof.
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
}

impl TokenSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign `email` for `purpose` with the purpose's default validity.
    pub fn sign(&self, email: &str, purpose: Purpose) -> String {
        self.sign_expiring_in(email, purpose, purpose.validity_days())
    }

    /// Sign `email` for `purpose`, expiring `validity_days` from now.
    pub fn sign_expiring_in(&self, email: &str, purpose: Purpose, validity_days: u32) -> String {
        let expires_at = now_seconds() + i64::from(validity_days) * SECONDS_PER_DAY;
        self.sign_with_expiry(email, purpose, expires_at)
    }

    fn sign_with_expiry(&self, email: &str, purpose: Purpose, expires_at: i64) -> String {
        let email_b64 = URL_SAFE_NO_PAD.encode(normalize_email(email));
        let signature = self.signature(&purpose.payload(&email_b64, expires_at));
        let signature_b64 = URL_SAFE_NO_PAD.encode(signature);
        format!("{email_b64}.{expires_at}.{signature_b64}")
    }

    /// Check `token` against `purpose` and return the subject email.
    ///
    /// Tokens arrive from URLs and are attacker-controlled, so every
    /// failure maps to a `TokenError` and nothing panics. Expiry is
    /// checked before the signature: an expired token is reported as
    /// expired even if it was also tampered with.
    pub fn verify(&self, token: &str, purpose: Purpose) -> Result<String, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        let [email_b64, expiry, signature_b64] = parts.as_slice() else {
            return Err(TokenError::Malformed);
        };

        let expires_at: i64 = expiry.parse().unwrap_or(0);
        if expires_at <= now_seconds() {
            return Err(TokenError::Expired);
        }

        // A signature segment that is not even valid base64 cannot match.
        let provided = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::BadSignature)?;
        let payload = purpose.payload(email_b64, expires_at);
        self.mac()
            .chain_update(payload.as_bytes())
            .verify_slice(&provided)
            .map_err(|_| TokenError::BadSignature)?;

        let email = URL_SAFE_NO_PAD
            .decode(email_b64)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(TokenError::Verification)?;

        Ok(normalize_email(&email))
    }

    fn signature(&self, payload: &str) -> Vec<u8> {
        self.mac()
            .chain_update(payload.as_bytes())
            .finalize()
            .into_bytes()
            .to_vec()
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key length")
    }
}

/// Emails are compared case-insensitively, so both signing and
/// verification fold to the same canonical form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn now_seconds() -> i64 {
    match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret")
    }

    // ----- expiry boundary tests -----

    #[test]
    fn token_expiring_in_the_future_verifies() {
        let token = signer().sign_with_expiry("a@b.com", Purpose::Confirm, now_seconds() + 60);
        assert_eq!(signer().verify(&token, Purpose::Confirm).unwrap(), "a@b.com");
    }

    #[test]
    fn token_with_expiry_exactly_now_is_expired() {
        let token = signer().sign_with_expiry("a@b.com", Purpose::Confirm, now_seconds());
        assert_eq!(
            signer().verify(&token, Purpose::Confirm),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn token_expired_one_second_ago_is_expired() {
        let token = signer().sign_with_expiry("a@b.com", Purpose::Unsubscribe, now_seconds() - 1);
        assert_eq!(
            signer().verify(&token, Purpose::Unsubscribe),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn zero_expiry_is_expired() {
        let token = signer().sign_with_expiry("a@b.com", Purpose::Unsubscribe, 0);
        assert_eq!(
            signer().verify(&token, Purpose::Unsubscribe),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn non_numeric_expiry_reports_expired_not_malformed() {
        let token = signer().sign("a@b.com", Purpose::Confirm);
        let parts: Vec<&str> = token.split('.').collect();
        let doctored = format!("{}.soon.{}", parts[0], parts[2]);
        assert_eq!(
            signer().verify(&doctored, Purpose::Confirm),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn expiry_wins_over_bad_signature() {
        let mut token = signer().sign_with_expiry("a@b.com", Purpose::Confirm, now_seconds() - 10);
        token.push('x');
        assert_eq!(
            signer().verify(&token, Purpose::Confirm),
            Err(TokenError::Expired)
        );
    }

    // ----- misc unit tests -----

    #[test]
    fn default_validity_windows() {
        assert_eq!(Purpose::Confirm.validity_days(), 7);
        assert_eq!(Purpose::Unsubscribe.validity_days(), 30);
    }

    #[test]
    fn secret_mismatch_is_invalid_signature() {
        let token = signer().sign("a@b.com", Purpose::Confirm);
        let other = TokenSigner::new("different-secret");
        assert_eq!(
            other.verify(&token, Purpose::Confirm),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn rejection_reasons_render_the_documented_strings() {
        assert_eq!(TokenError::Malformed.to_string(), "Malformed token");
        assert_eq!(TokenError::Expired.to_string(), "Token expired");
        assert_eq!(TokenError::BadSignature.to_string(), "Invalid signature");
        assert_eq!(TokenError::Verification.to_string(), "Verification error");
    }

    #[test]
    fn normalize_folds_case_and_trims() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
    }
}
