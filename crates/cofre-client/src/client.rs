//! Client for the remote Vigenere cipher service
//!
//! The service owns the cipher; this client only speaks its JSON protocol.
//! Requests are `{"texto", "clave"}` and 200 responses carry
//! `{"texto_cifrado"}` or `{"texto_descifrado"}`; any other status carries
//! `{"error"}`. The Spanish field names are fixed by the remote API.

use crate::{ClientError, Config, Result};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Serialize)]
struct CipherRequest<'a> {
    texto: &'a str,
    clave: &'a str,
}

#[derive(Deserialize)]
struct EncryptResponse {
    texto_cifrado: String,
}

#[derive(Deserialize)]
struct DecryptResponse {
    texto_descifrado: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Async client for the remote substitution-cipher service
pub struct VigenereClient {
    config: Config,
    http: Client,
}

impl VigenereClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Ok(agent) = config.user_agent.parse() {
            headers.insert(header::USER_AGENT, agent);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create with an endpoint URL and default settings
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Self::new(Config::new(endpoint))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encrypt `text` with `key` on the remote service
    #[instrument(skip(self, key))]
    pub async fn encrypt(&self, text: &str, key: &str) -> Result<String> {
        let body = self.post("cifrar", text, key).await?;
        let parsed: EncryptResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(parsed.texto_cifrado)
    }

    /// Decrypt `text` with `key` on the remote service
    #[instrument(skip(self, key))]
    pub async fn decrypt(&self, text: &str, key: &str) -> Result<String> {
        let body = self.post("descifrar", text, key).await?;
        let parsed: DecryptResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(parsed.texto_descifrado)
    }

    async fn post(&self, operation: &str, texto: &str, clave: &str) -> Result<String> {
        let url = format!("{}/{}", self.config.base_url(), operation);
        debug!(%url, "calling cipher service");

        let response = self
            .http
            .post(&url)
            .json(&CipherRequest { texto, clave })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("unexpected response body: {body}"));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}
