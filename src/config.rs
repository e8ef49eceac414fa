use anyhow::{Result, bail};
use reqwest::Url;

use crate::picker::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_INPUT_LENGTH};

/// Externally supplied display strings. Treated as opaque; callers localize.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub placeholder: String,
    pub waiting_for_results: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            placeholder: "Search for a file ...".to_string(),
            waiting_for_results: "Waiting for results ...".to_string(),
        }
    }
}

/// How the chosen file id is surfaced to the enclosing form submission.
#[derive(Clone, Debug, PartialEq)]
pub enum FormBinding {
    /// Emit the bare value.
    None,
    /// Plain field name, emitted as `name=value`.
    Field(String),
    /// Model + attribute pair, emitted as `model[attribute]=value`.
    ModelAttribute { model: String, attribute: String },
}

impl FormBinding {
    pub fn input_name(&self) -> Option<String> {
        match self {
            FormBinding::None => None,
            FormBinding::Field(name) => Some(name.clone()),
            FormBinding::ModelAttribute { model, attribute } => {
                Some(format!("{model}[{attribute}]"))
            }
        }
    }

    pub fn render(&self, value: &str) -> String {
        match self.input_name() {
            Some(name) => format!("{name}={value}"),
            None => value.to_string(),
        }
    }
}

/// Validated picker configuration.
///
/// Replaces the loosely-typed option bag the upstream widget hands to its
/// dropdown library with named, enumerable fields, and carries the preview
/// URL prefix explicitly instead of interpolating it into generated script.
#[derive(Clone, Debug)]
pub struct PickerConfig {
    pub search_url: String,
    pub preview_url: String,
    pub min_input_length: usize,
    pub debounce_ms: u64,
    pub labels: Labels,
    pub binding: FormBinding,
}

impl PickerConfig {
    pub fn new(search_url: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            preview_url: preview_url.into(),
            min_input_length: DEFAULT_MIN_INPUT_LENGTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            labels: Labels::default(),
            binding: FormBinding::None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.search_url.trim().is_empty() {
            bail!("search URL must not be empty");
        }
        Url::parse(&self.search_url)
            .map_err(|e| anyhow::anyhow!("invalid search URL {:?}: {e}", self.search_url))?;
        Url::parse(&self.preview_url)
            .map_err(|e| anyhow::anyhow!("invalid preview URL {:?}: {e}", self.preview_url))?;
        if self.min_input_length == 0 {
            bail!("minimum input length must be at least 1");
        }
        match &self.binding {
            FormBinding::None => {}
            FormBinding::Field(name) => {
                if name.trim().is_empty() {
                    bail!("field name must not be blank");
                }
            }
            FormBinding::ModelAttribute { model, attribute } => {
                if model.trim().is_empty() || attribute.trim().is_empty() {
                    bail!("model and attribute must not be blank");
                }
            }
        }
        Ok(())
    }

    /// Builds the stream link for a file id: `<preview-url>/<id>`.
    pub fn preview_link(&self, id: &str) -> String {
        format!("{}/{id}", self.preview_url.trim_end_matches('/'))
    }
}

/// Derives the stream endpoint from the search endpoint when the caller does
/// not supply one. The two are siblings in the upstream API (`.../search`,
/// `.../stream`).
pub fn derive_preview_url(search_url: &str) -> String {
    let trimmed = search_url.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((base, "search")) => format!("{base}/stream"),
        _ => format!("{trimmed}/stream"),
    }
}
