use std::time::Duration;

use reelcase_catalog::NewMovie;

use crate::credentials::Credentials;
use crate::error::OmdbError;
use crate::types::OmdbPayload;

const BASE_URL: &str = "https://www.omdbapi.com/";

/// One lookup is one short round trip; a stuck request should fail fast
/// rather than hang the prompt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking HTTP client for the OMDb API.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    creds: Credentials,
}

impl OmdbClient {
    /// Create a new client with the fixed request timeout.
    pub fn new(creds: Credentials) -> Result<Self, OmdbError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, creds })
    }

    /// Look up a movie by title and normalize the result.
    pub fn lookup_title(&self, title: &str) -> Result<NewMovie, OmdbError> {
        let payload = self.fetch_title(title)?;
        payload.normalize()
    }

    /// Fetch the raw OMDb payload for a title.
    pub fn fetch_title(&self, title: &str) -> Result<OmdbPayload, OmdbError> {
        let resp = self
            .http
            .get(BASE_URL)
            .query(&[("apikey", self.creds.api_key.as_str()), ("t", title)])
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OmdbError::InvalidApiKey);
        }

        let text = resp.text()?;
        let payload: OmdbPayload = serde_json::from_str(&text).map_err(|e| {
            OmdbError::Api(format!(
                "Failed to parse OMDb response: {e}. Response: {}",
                &text[..text.len().min(200)]
            ))
        })?;

        // OMDb reports not-found and key problems as 200s with an Error field
        if !payload.found() {
            let message = payload
                .error
                .unwrap_or_else(|| "unspecified error".to_string());
            if message.contains("not found") {
                return Err(OmdbError::NotFound {
                    title: title.to_string(),
                });
            }
            if message.contains("Invalid API key") {
                return Err(OmdbError::InvalidApiKey);
            }
            return Err(OmdbError::Api(message));
        }

        Ok(payload)
    }
}
