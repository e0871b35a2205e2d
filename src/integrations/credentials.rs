//! Google service-account authentication
//!
//! Implements the OAuth 2.0 JWT bearer flow: a claim set signed with the
//! account's RSA key is exchanged at `token_uri` for a short-lived access
//! token.

use std::path::Path;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ensure_success;
use crate::error::{ExpenseError, ExpenseResult};

/// Scopes requested for spreadsheet access and lookup by title
pub const SHEETS_SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

/// The fields of a service-account key file this crate needs
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// JWT claim set for the bearer grant
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// An OAuth access token
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl ServiceAccountKey {
    /// Load a key from a JSON key file
    pub fn load(path: &Path) -> ExpenseResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> ExpenseResult<Self> {
        serde_json::from_str(contents)
            .map_err(|e| ExpenseError::sheets(format!("Invalid service-account key: {}", e)))
    }

    /// Claim set issued at `now` (seconds since the epoch)
    pub fn claims(&self, now: i64) -> Claims {
        Claims {
            iss: self.client_email.clone(),
            scope: SHEETS_SCOPES.to_string(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        }
    }

    /// Sign the claim set with the account's private key (RS256)
    pub fn signed_assertion(&self, now: i64) -> ExpenseResult<String> {
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())
            .map_err(|e| ExpenseError::sheets(format!("Invalid private key: {}", e)))?;

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &self.claims(now), &key)
            .map_err(|e| ExpenseError::sheets(format!("Failed to sign JWT: {}", e)))
    }

    /// Exchange a signed assertion for an access token
    pub fn fetch_access_token(&self, client: &Client) -> ExpenseResult<AccessToken> {
        let assertion = self.signed_assertion(Utc::now().timestamp())?;
        debug!(account = %self.client_email, "requesting access token");

        let response = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .map_err(|e| ExpenseError::sheets(e.to_string()))?;

        let response = ensure_success(response, ExpenseError::sheets)?;
        response
            .json()
            .map_err(|e| ExpenseError::sheets(format!("Failed to parse token response: {}", e)))
    }
}
