use crate::picker::constants::PAGE_SIZE;
use crate::picker::domain::models::FileHit;
use crate::picker::ui::components::{Component, row};
use crate::picker::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Dropdown body: one line per result, preview column first.
#[derive(Default)]
pub struct ResultList {
    hits: Vec<FileHit>,
    selected_index: usize,
    scroll_offset: usize,
    waiting: Option<String>,
    preview_base: String,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hits(&mut self, hits: Vec<FileHit>) {
        if hits.len() != self.hits.len() {
            self.scroll_offset = 0;
        }
        self.hits = hits;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    /// Waiting label shown as the transient placeholder row while a request
    /// is in flight; `None` once results (or the empty state) are known.
    pub fn set_waiting(&mut self, waiting: Option<String>) {
        self.waiting = waiting;
    }

    pub fn set_preview_base(&mut self, preview_base: String) {
        self.preview_base = preview_base;
    }

    fn selectable(&self, index: usize) -> bool {
        self.hits.get(index).is_some_and(|h| !h.loading)
    }

    /// Moves the highlight by `delta` rows, skipping placeholder rows.
    fn step(&mut self, delta: isize) -> bool {
        let len = self.hits.len();
        if len == 0 {
            return false;
        }
        let mut index = self.selected_index as isize;
        loop {
            index += delta.signum();
            if index < 0 || index >= len as isize {
                return false;
            }
            if self.selectable(index as usize) {
                self.selected_index = index as usize;
                return true;
            }
        }
    }

    fn jump(&mut self, target: usize) -> bool {
        let clamped = target.min(self.hits.len().saturating_sub(1));
        if self.selectable(clamped) && clamped != self.selected_index {
            self.selected_index = clamped;
            true
        } else if !self.selectable(clamped) {
            let before = self.selected_index;
            self.selected_index = clamped;
            if !self.step(if clamped < before { 1 } else { -1 }) {
                self.selected_index = before;
                return false;
            }
            true
        } else {
            false
        }
    }

    fn page(&mut self, down: bool) -> bool {
        let target = if down {
            self.selected_index.saturating_add(PAGE_SIZE)
        } else {
            self.selected_index.saturating_sub(PAGE_SIZE)
        };
        self.jump(target)
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Results").borders(Borders::ALL);
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;

        if let Some(waiting) = &self.waiting {
            let placeholder = FileHit::placeholder(waiting.clone());
            let items = vec![ListItem::new(row::hit_line(
                &placeholder,
                &self.preview_base,
                inner_width,
            ))];
            f.render_widget(List::new(items).block(block), area);
            return;
        }

        if self.hits.is_empty() {
            let items = vec![ListItem::new(Line::from(Span::styled(
                "No results found",
                Style::default().fg(Color::DarkGray),
            )))];
            f.render_widget(List::new(items).block(block), area);
            return;
        }

        // Keep the highlighted row inside the visible window
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if inner_height > 0 && self.selected_index >= self.scroll_offset + inner_height {
            self.scroll_offset = self.selected_index + 1 - inner_height;
        }

        let items: Vec<ListItem> = self
            .hits
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_height.max(1))
            .map(|(i, hit)| {
                let line = row::hit_line(hit, &self.preview_base, inner_width);
                let item = ListItem::new(line);
                if i == self.selected_index && !hit.loading {
                    item.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    item
                }
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self
                .step(-1)
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::Down => self
                .step(1)
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::PageUp => self
                .page(false)
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::PageDown => self
                .page(true)
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::Home => self
                .jump(0)
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::End => self
                .jump(self.hits.len().saturating_sub(1))
                .then(|| Message::HighlightResult(self.selected_index)),
            KeyCode::Enter => Some(Message::Activate),
            _ => None,
        }
    }
}
