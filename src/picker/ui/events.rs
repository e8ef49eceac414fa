use crate::picker::domain::models::FileHit;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchCompleted { id: u64, hits: Vec<FileHit> },
    SearchFailed { id: u64, error: String },
    HighlightResult(usize),

    // Selection events
    Activate,
    Unselect,

    // Selection-gated actions
    CopyLink,
    DirectLink,
    Download,

    // UI events
    SetStatus(String),
    ClearStatus,
}
