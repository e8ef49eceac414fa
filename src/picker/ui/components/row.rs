use crate::picker::constants::PREVIEW_COLUMN_WIDTH;
use crate::picker::domain::models::{FileHit, FileKind};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Tag shown in the fixed-width preview column.
pub fn kind_tag(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => "[IMG]",
        FileKind::Directory => "[DIR]",
        FileKind::Pdf => "[PDF]",
        FileKind::Archive => "[ZIP]",
        FileKind::Document => "[DOC]",
        FileKind::Spreadsheet => "[XLS]",
        FileKind::Other => "[---]",
    }
}

pub fn kind_color(kind: FileKind) -> Color {
    match kind {
        FileKind::Image => Color::Magenta,
        FileKind::Directory => Color::Blue,
        FileKind::Pdf => Color::Red,
        FileKind::Archive => Color::Yellow,
        FileKind::Document => Color::Cyan,
        FileKind::Spreadsheet => Color::Green,
        FileKind::Other => Color::White,
    }
}

/// Builds the two-column display line for a result row: fixed-width preview
/// tag plus path text. Loading placeholders render their text verbatim.
/// Image rows carry the thumbnail link built from the preview URL prefix.
pub fn hit_line<'a>(hit: &FileHit, preview_base: &str, max_width: usize) -> Line<'a> {
    if hit.loading {
        return Line::from(Span::styled(
            hit.display_path().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let kind = hit.kind();
    let text_width = max_width.saturating_sub(PREVIEW_COLUMN_WIDTH);
    let mut spans = vec![
        Span::styled(
            format!("{:<width$}", kind_tag(kind), width = PREVIEW_COLUMN_WIDTH),
            Style::default().fg(kind_color(kind)),
        ),
        Span::raw(truncate(hit.display_path(), text_width)),
    ];

    if kind == FileKind::Image {
        if let Some(id) = hit.id.as_deref().filter(|s| !s.is_empty()) {
            spans.push(Span::styled(
                format!("  {}/{id}", preview_base.trim_end_matches('/')),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Line::from(spans)
}

pub fn truncate(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width <= 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}
