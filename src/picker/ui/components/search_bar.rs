use crate::picker::ui::components::Component;
use crate::picker::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The picker's text input. Shows the placeholder while empty, the query
/// while typing, and the selection label once an item is chosen.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    placeholder: String,
    selection_label: Option<String>,
    is_searching: bool,
    status: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_placeholder(&mut self, placeholder: String) {
        self.placeholder = placeholder;
    }

    pub fn set_selection_label(&mut self, label: Option<String>) {
        self.selection_label = label;
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn displayed_label(&self) -> &str {
        match &self.selection_label {
            Some(label) => label,
            None if self.query.is_empty() => &self.placeholder,
            None => &self.query,
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum()
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let content = if let Some(label) = &self.selection_label {
            Line::from(vec![
                Span::styled(label.clone(), Style::default().fg(Color::Cyan)),
                Span::styled("  (Esc to clear)", Style::default().fg(Color::DarkGray)),
            ])
        } else if self.query.is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.cursor_position < self.query.chars().count() {
            let byte_pos = self.byte_index(self.cursor_position);
            let (before, after) = self.query.split_at(byte_pos);
            let cursor_char = after.chars().next().unwrap_or(' ');
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(after.chars().skip(1).collect::<String>()),
            ])
        } else {
            Line::from(vec![
                Span::raw(self.query.clone()),
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
            ])
        };

        let mut title = "Find file".to_string();
        if self.is_searching {
            title.push_str(" [searching]");
        }
        if let Some(status) = &self.status {
            title.push_str(&format!(" - {status}"));
        }

        let input = Paragraph::new(content)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // Ctrl+A - beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    return None;
                }
                // Ctrl+E - end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    return None;
                }
                // Ctrl+U - delete to beginning of line
                KeyCode::Char('u') => {
                    if self.cursor_position > 0 && self.delete_range(0, self.cursor_position) {
                        return Some(Message::QueryChanged(self.query.clone()));
                    }
                    return None;
                }
                // Ctrl+K - delete to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.cursor_position < len && self.delete_range(self.cursor_position, len) {
                        return Some(Message::QueryChanged(self.query.clone()));
                    }
                    return None;
                }
                _ => return None,
            }
        }

        match key.code {
            // Alt-chords are shortcuts elsewhere, not text input
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                Some(Message::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0
                    && self.delete_range(self.cursor_position - 1, self.cursor_position)
                {
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_range(self.cursor_position, self.cursor_position + 1) {
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
