pub mod action_bar;
pub mod result_list;
pub mod row;
pub mod search_bar;

#[cfg(test)]
mod result_list_test;

use crate::picker::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
