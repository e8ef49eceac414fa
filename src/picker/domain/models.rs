use serde::Deserialize;

/// Preview category for a result row, derived from the item's media type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Directory,
    Pdf,
    Archive,
    Document,
    Spreadsheet,
    Other,
}

/// Substring rules tested in order; the first match wins.
const MIME_RULES: [(&str, FileKind); 6] = [
    ("image", FileKind::Image),
    ("directory", FileKind::Directory),
    ("pdf", FileKind::Pdf),
    ("zip", FileKind::Archive),
    ("doc", FileKind::Document),
    ("xls", FileKind::Spreadsheet),
];

impl FileKind {
    pub fn from_mime(mime: &str) -> Self {
        for (needle, kind) in MIME_RULES {
            if mime.contains(needle) {
                return kind;
            }
        }
        FileKind::Other
    }
}

/// One result item from the search endpoint.
///
/// All wire fields are optional; a row missing `mime` falls through to the
/// generic preview branch. `loading` marks the transient placeholder row
/// shown while a request is in flight, which renders its display text
/// verbatim and is never selectable.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FileHit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub loading: bool,
}

impl FileHit {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            loading: true,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(self.mime.as_deref().unwrap_or(""))
    }

    /// The path column text, falling back to the raw display text.
    pub fn display_path(&self) -> &str {
        self.path
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }

    /// The label shown in the input once this item is chosen: `id` if
    /// present, else `name`, else the raw display text; with neither `id`
    /// nor `path` present the raw display text is used directly (covers
    /// the still-typing placeholder state).
    pub fn selection_label(&self) -> String {
        let id = self.id.as_deref().filter(|s| !s.is_empty());
        let path = self.path.as_deref().filter(|s| !s.is_empty());
        if id.is_none() && path.is_none() {
            return self.text.clone().unwrap_or_default();
        }
        id.map(str::to_string)
            .or_else(|| self.name.clone())
            .or_else(|| self.text.clone())
            .unwrap_or_default()
    }
}

/// The single active selection. Created on a select event, replaced by the
/// next one, cleared on unselect; no persistence beyond the bound value.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub id: Option<String>,
    pub path: Option<String>,
    pub label: String,
}

impl Selection {
    pub fn from_hit(hit: &FileHit) -> Self {
        Self {
            id: hit.id.clone().filter(|s| !s.is_empty()),
            path: hit.path.clone().filter(|s| !s.is_empty()),
            label: hit.selection_label(),
        }
    }

    /// The identifier handed to the host form and to link building.
    pub fn output_value(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.label)
    }
}

// Search request and response for the worker channel
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub term: String,
}

#[derive(Clone, Debug)]
pub struct SearchResponse {
    pub id: u64,
    pub hits: Vec<FileHit>,
    pub error: Option<String>,
}
