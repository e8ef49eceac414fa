//! Remote search endpoint client.
//!
//! The endpoint contract is `GET <search-url>?q=<term>` returning either a
//! bare JSON array of result items or an object with a results-bearing
//! field. The preview/stream endpoint is only ever used to build URLs.

use crate::picker::constants::HTTP_TIMEOUT_SECS;
use crate::picker::domain::models::FileHit;
use anyhow::{Context, Result, bail};
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Seam between the picker and the remote endpoint.
pub trait SearchBackend {
    fn search(&self, term: &str) -> Result<Vec<FileHit>>;
}

pub struct HttpSearchBackend {
    client: Client,
    search_url: Url,
}

impl HttpSearchBackend {
    pub fn new(search_url: &str) -> Result<Self> {
        let search_url = Url::parse(search_url)
            .with_context(|| format!("invalid search URL {search_url:?}"))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self { client, search_url })
    }
}

impl SearchBackend for HttpSearchBackend {
    fn search(&self, term: &str) -> Result<Vec<FileHit>> {
        tracing::debug!(%term, url = %self.search_url, "issuing search request");
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", term)])
            .send()
            .context("search request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("search endpoint returned {status}");
        }

        let payload: Value = response
            .json()
            .context("search endpoint returned invalid JSON")?;
        Ok(parse_hits(payload))
    }
}

/// Fields probed, in order, when the endpoint wraps its results in an object.
const RESULT_FIELDS: [&str; 3] = ["results", "items", "data"];

/// Decodes a search payload. Malformed items degrade to whatever fields can
/// be salvaged rather than failing the whole response.
pub fn parse_hits(payload: Value) -> Vec<FileHit> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(ref map) => RESULT_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_array).cloned())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    items.into_iter().map(hit_from_value).collect()
}

fn hit_from_value(value: Value) -> FileHit {
    match serde_json::from_value::<FileHit>(value.clone()) {
        Ok(hit) => hit,
        Err(_) => FileHit {
            id: lenient_string(&value, "id"),
            path: lenient_string(&value, "path"),
            mime: lenient_string(&value, "mime"),
            name: lenient_string(&value, "name"),
            text: lenient_string(&value, "text"),
            loading: value
                .get("loading")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        },
    }
}

/// Reads a field as a string, coercing scalar ids the endpoint may emit as
/// numbers.
fn lenient_string(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
