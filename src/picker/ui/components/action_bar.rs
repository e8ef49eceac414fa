use crate::picker::ui::components::Component;
use crate::picker::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The three selection-dependent actions. Disabled until a selection
/// exists; the enabled flag is their only state.
#[derive(Default)]
pub struct ActionBar {
    enabled: bool,
}

impl ActionBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn button_style(&self) -> Style {
        if self.enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for ActionBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let style = self.button_style();
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let line = Line::from(vec![
            Span::styled("Copy link (Ctrl+Y)", style),
            separator.clone(),
            Span::styled("Direct link (Ctrl+L)", style),
            separator,
            Span::styled("Download (Ctrl+G)", style),
        ]);

        let bar = Paragraph::new(line)
            .block(Block::default().title("Actions").borders(Borders::ALL))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(bar, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if !self.enabled || !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('y') => Some(Message::CopyLink),
            KeyCode::Char('l') => Some(Message::DirectLink),
            KeyCode::Char('g') => Some(Message::Download),
            _ => None,
        }
    }
}
