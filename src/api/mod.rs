/// HTTP client for the external palette store.
mod worker;

pub use worker::{ApiEvent, Request, spawn_worker};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{PaletteId, SavedPalette};

/// Fallback base URL when neither `--api-base` nor `PALETTR_API_BASE` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to reach palette store: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("palette store returned {0}")]
    Status(reqwest::StatusCode),
}

/// Request body for `POST /api/palettes`.
#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    colors: &'a [String],
    name: &'a str,
}

/// Envelope for `GET /api/palettes`. A missing `data` key means an empty
/// collection.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Option<Vec<SavedPalette>>,
}

/// Thin wrapper around a blocking `reqwest::Client` bound to one base URL.
/// The store owns all palette records; this client never caches anything.
#[derive(Clone, Debug)]
pub struct StoreClient {
    base_url: String,
    http: Client,
}

impl StoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full saved-palette collection, in server order. Non-2xx
    /// statuses count as failures here, unlike `create`/`delete`.
    pub fn list(&self) -> Result<Vec<SavedPalette>, StoreError> {
        let response = self.http.get(self.url("/api/palettes")).send()?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }
        let envelope: ListEnvelope = response.json()?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Persist a palette under `name`. The caller trims the name first; an
    /// empty name never reaches this function. The response body is ignored,
    /// so any completed exchange counts as success.
    pub fn create(&self, name: &str, colors: &[String]) -> Result<(), StoreError> {
        self.http
            .post(self.url("/api/palettes"))
            .json(&CreateBody { colors, name })
            .send()?;
        Ok(())
    }

    /// Remove a palette by id. The response body is ignored.
    pub fn delete(&self, id: &PaletteId) -> Result<(), StoreError> {
        self.http
            .delete(self.url(&format!("/api/palettes/{id}")))
            .send()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteId;

    #[test]
    fn list_envelope_with_data() {
        let body = r##"{"data":[{"id":1,"name":"X","colors":["#aabbcc","#112233"]}]}"##;
        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        let palettes = envelope.data.unwrap_or_default();
        assert_eq!(
            palettes,
            vec![SavedPalette {
                id: PaletteId::Num(1),
                name: "X".to_string(),
                colors: vec!["#aabbcc".to_string(), "#112233".to_string()],
            }]
        );
    }

    #[test]
    fn list_envelope_without_data_is_empty() {
        let envelope: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.unwrap_or_default().is_empty());
    }

    #[test]
    fn create_body_shape() {
        let colors: Vec<String> = ["#aabbcc", "#112233", "#445566", "#778899", "#ffffff"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let body = serde_json::to_value(CreateBody {
            colors: &colors,
            name: "Sunset",
        })
        .unwrap();
        assert_eq!(body["name"], "Sunset");
        assert_eq!(body["colors"].as_array().unwrap().len(), 5);
        assert_eq!(body["colors"][0], "#aabbcc");
        assert_eq!(body["colors"][4], "#ffffff");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = StoreClient::new("http://localhost:3000/");
        assert_eq!(
            client.url("/api/palettes"),
            "http://localhost:3000/api/palettes"
        );
    }
}
