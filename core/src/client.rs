//! Stateless request builder and response interpreter for the countries API.
//!
//! # Design
//! `CountryClient` holds only a `base_url`. The list operation is split into
//! `build_list_countries`, which describes the GET as an `HttpRequest`, and
//! `parse_list_countries`, which turns an `HttpResponse` into mapped
//! countries. `decode_response` carries the status and decoding rules and is
//! shared with `HttpFetcher`, so a host doing its own I/O and the built-in
//! fetcher classify failures identically.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::dto::CountryDto;
use crate::error::CountryError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::mapper::map_countries;
use crate::model::Country;

/// Public REST Countries API, version 3.1.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from `/all`. The API rejects `/all` without a selection.
pub const LIST_FIELDS: &[&str] = &["name", "flags", "capital", "continents", "population"];

#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: String,
}

impl Default for CountryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CountryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The one endpoint this client talks to.
    pub fn list_countries_url(&self) -> Result<Url, CountryError> {
        let raw = format!("{}/all?fields={}", self.base_url, LIST_FIELDS.join(","));
        Url::parse(&raw).map_err(CountryError::InvalidUrl)
    }

    pub fn build_list_countries(&self) -> Result<HttpRequest, CountryError> {
        let url = self.list_countries_url()?;
        debug!(%url, "built list countries request");
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Interpret a response to `build_list_countries`. Countries come back in
    /// payload order; sorting is left to the presentation layer.
    pub fn parse_list_countries(&self, response: HttpResponse) -> Result<Vec<Country>, CountryError> {
        let dtos: Vec<CountryDto> = decode_response(response)?;
        Ok(map_countries(dtos))
    }
}

/// Apply the status and body rules to a raw response.
///
/// - status outside 200..=299: `Server`, body discarded
/// - body that is not valid JSON for `T`, empty included: `Decoding`
pub fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, CountryError> {
    if !response.is_success() {
        return Err(CountryError::Server {
            status: response.status,
        });
    }
    serde_json::from_str(&response.body).map_err(CountryError::decoding)
}
