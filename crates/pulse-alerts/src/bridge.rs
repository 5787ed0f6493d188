//! WhatsApp bridge client
//!
//! The browser-automation session itself lives in an external bridge
//! daemon; this client only speaks HTTP to it. The daemon owns login
//! state (QR scan) and the actual message dispatch.

use crate::error::{AlertError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bridge session state as reported by the daemon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BridgeStatus {
    /// Logged in and able to send
    pub ready: bool,
    /// Waiting for a QR scan to authenticate
    #[serde(rename = "qrPending", default)]
    pub qr_pending: bool,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    number: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct BridgeError {
    error: String,
}

/// HTTP client for the local WhatsApp bridge daemon
#[derive(Clone)]
pub struct BridgeClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BridgeClient {
    /// Create a client for a bridge daemon at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AlertError::Configuration(format!("invalid bridge URL: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Create a client from the `WHATSAPP_BRIDGE_URL` environment variable
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("WHATSAPP_BRIDGE_URL")
            .map_err(|_| AlertError::Configuration("WHATSAPP_BRIDGE_URL not set".to_string()))?;
        Self::new(&base_url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AlertError::Configuration(format!("invalid bridge path {path}: {e}")))
    }

    /// Current bridge session state
    pub async fn status(&self) -> Result<BridgeStatus> {
        let url = self.endpoint("status")?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Bridge(body));
        }

        Ok(response.json().await?)
    }

    /// Relay a message to a recipient.
    ///
    /// Refuses to send while the bridge is unauthenticated so the caller
    /// can surface "scan the QR code" instead of a generic failure.
    #[instrument(skip(self, message), fields(recipient = %number))]
    pub async fn send(&self, number: &str, message: &str) -> Result<()> {
        let status = self.status().await?;
        if !status.ready {
            let reason = if status.qr_pending {
                "bridge is waiting for a QR scan".to_string()
            } else {
                "bridge is still initializing".to_string()
            };
            return Err(AlertError::BridgeNotReady(reason));
        }

        let jid = normalize_recipient(number)?;
        let url = self.endpoint("send")?;
        let response = self
            .client
            .post(url)
            .json(&SendRequest {
                number: &jid,
                message,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<BridgeError>(&body)
                .map_or(body, |parsed| parsed.error);
            return Err(AlertError::Bridge(detail));
        }

        info!("Alert relayed");
        Ok(())
    }
}

/// Normalize a recipient into the `<digits>@c.us` JID the bridge expects
pub fn normalize_recipient(number: &str) -> Result<String> {
    let trimmed = number.trim();
    if let Some(jid) = trimmed.strip_suffix("@c.us") {
        if jid.is_empty() || !jid.chars().all(|c| c.is_ascii_digit()) {
            return Err(AlertError::InvalidRecipient(trimmed.to_string()));
        }
        return Ok(trimmed.to_string());
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(AlertError::InvalidRecipient(trimmed.to_string()));
    }

    Ok(format!("{digits}@c.us"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_number() {
        assert_eq!(normalize_recipient("14155552671").expect("valid"), "14155552671@c.us");
    }

    #[test]
    fn test_normalize_formatted_number() {
        assert_eq!(
            normalize_recipient("+1 (415) 555-2671").expect("valid"),
            "14155552671@c.us"
        );
    }

    #[test]
    fn test_normalize_preserves_existing_jid() {
        assert_eq!(
            normalize_recipient("14155552671@c.us").expect("valid"),
            "14155552671@c.us"
        );
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_recipient("   ").is_err());
        assert!(normalize_recipient("@c.us").is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            BridgeClient::new("not a url"),
            Err(AlertError::Configuration(_))
        ));
    }

    #[test]
    fn test_status_parsing() {
        let status: BridgeStatus =
            serde_json::from_str(r#"{"ready": false, "qrPending": true}"#).expect("valid status");
        assert!(!status.ready);
        assert!(status.qr_pending);
    }

    #[tokio::test]
    #[ignore] // Requires a running bridge daemon
    async fn test_live_status() {
        let client = BridgeClient::from_env().expect("WHATSAPP_BRIDGE_URL set");
        let status = client.status().await.expect("status fetched");
        let _ = status.ready;
    }
}
