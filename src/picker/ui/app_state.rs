use crate::config::PickerConfig;
use crate::picker::domain::models::{FileHit, Selection};
use crate::picker::ui::commands::Command;
use crate::picker::ui::events::Message;

pub struct AppState {
    pub config: PickerConfig,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub hits: Vec<FileHit>,
    pub selected_index: usize,
    pub is_searching: bool,
    pub current_search_id: u64,
}

pub struct UiState {
    pub status: Option<String>,
    pub selection: Option<Selection>,
}

impl AppState {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            search: SearchState {
                query: String::new(),
                hits: Vec::new(),
                selected_index: 0,
                is_searching: false,
                current_search_id: 0,
            },
            ui: UiState {
                status: None,
                selection: None,
            },
        }
    }

    pub fn actions_enabled(&self) -> bool {
        self.ui.selection.is_some()
    }

    fn qualifying_term(&self) -> Option<&str> {
        let term = self.search.query.trim();
        (term.chars().count() >= self.config.min_input_length).then_some(term)
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                // Typing supersedes any active selection (single-select)
                self.ui.selection = None;
                if self.qualifying_term().is_some() {
                    Command::ScheduleSearch(self.config.debounce_ms)
                } else {
                    // Below the minimum length no query fires; the debounce
                    // timer re-checks the term when it expires. Bumping the
                    // generation invalidates any in-flight request so its
                    // response cannot repopulate the cleared list.
                    self.search.current_search_id += 1;
                    self.search.hits.clear();
                    self.search.selected_index = 0;
                    self.search.is_searching = false;
                    Command::None
                }
            }
            Message::SearchCompleted { id, hits } => {
                if id != self.search.current_search_id {
                    // Stale response from a superseded request
                    return Command::None;
                }
                self.search.hits = hits;
                self.search.is_searching = false;
                self.search.selected_index = first_selectable(&self.search.hits);
                self.ui.status = None;
                Command::None
            }
            Message::SearchFailed { id, error } => {
                if id != self.search.current_search_id {
                    return Command::None;
                }
                self.search.hits.clear();
                self.search.selected_index = 0;
                self.search.is_searching = false;
                Command::ShowMessage(format!("Error loading results: {error}"))
            }
            Message::HighlightResult(index) => {
                if index < self.search.hits.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::Activate => {
                let Some(hit) = self.search.hits.get(self.search.selected_index) else {
                    return Command::None;
                };
                if hit.loading {
                    return Command::None;
                }
                let candidate = Selection::from_hit(hit);
                match &self.ui.selection {
                    Some(current) if *current == candidate => Command::Accept,
                    _ => {
                        self.ui.selection = Some(candidate);
                        Command::None
                    }
                }
            }
            Message::Unselect => {
                self.ui.selection = None;
                Command::None
            }
            Message::CopyLink => match self.selection_link() {
                Some(link) => Command::CopyToClipboard(link),
                None => Command::None,
            },
            Message::DirectLink => match self.selection_link() {
                Some(link) => Command::ShowMessage(format!("Link: {link}")),
                None => Command::None,
            },
            Message::Download => match self.selection_link() {
                Some(link) => Command::ShowMessage(format!("Download: {link}")),
                None => Command::None,
            },
            Message::SetStatus(status) => {
                self.ui.status = Some(status);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.status = None;
                Command::ClearMessage
            }
        }
    }

    /// Term to send when the debounce timer expires, if still qualifying.
    pub fn pending_term(&self) -> Option<String> {
        self.qualifying_term().map(str::to_string)
    }

    fn selection_link(&self) -> Option<String> {
        self.ui
            .selection
            .as_ref()
            .map(|sel| self.config.preview_link(sel.output_value()))
    }
}

fn first_selectable(hits: &[FileHit]) -> usize {
    hits.iter().position(|h| !h.loading).unwrap_or(0)
}
