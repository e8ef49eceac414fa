use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use crate::api::client::{HttpSearchBackend, SearchBackend};
use crate::config::PickerConfig;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use self::application::search_service::SearchService;
use self::domain::models::{SearchRequest, SearchResponse, Selection};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The interactive file picker: a search input bound to a remote endpoint,
/// a result dropdown, and selection-gated actions. `run` blocks until the
/// user accepts a selection or dismisses the picker.
pub struct FilePicker {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    search_sender: Option<Sender<SearchRequest>>,
    search_receiver: Option<Receiver<SearchResponse>>,
    current_search_id: u64,
    last_search_timer: Option<Instant>,
    scheduled_search_delay: Option<u64>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    outcome: Option<Selection>,
    should_quit: bool,
}

impl FilePicker {
    pub fn new(config: PickerConfig) -> Result<Self> {
        config.validate()?;
        let backend = HttpSearchBackend::new(&config.search_url)?;
        Ok(Self::with_backend(config, Box::new(backend)))
    }

    pub fn with_backend(config: PickerConfig, backend: Box<dyn SearchBackend + Send + Sync>) -> Self {
        Self {
            state: AppState::new(config),
            renderer: Renderer::new(),
            search_service: Arc::new(SearchService::new(backend)),
            search_sender: None,
            search_receiver: None,
            current_search_id: 0,
            last_search_timer: None,
            scheduled_search_delay: None,
            last_ctrl_c_press: None,
            message_timer: None,
            outcome: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<Option<Selection>> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_search_worker();
        self.search_sender = Some(tx);
        self.search_receiver = Some(rx);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result?;
        Ok(self.outcome.take())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Check for search results
            if let Some(receiver) = &self.search_receiver {
                if let Ok(response) = receiver.try_recv() {
                    let msg = match response.error {
                        Some(error) => Message::SearchFailed {
                            id: response.id,
                            error,
                        },
                        None => Message::SearchCompleted {
                            id: response.id,
                            hits: response.hits,
                        },
                    };
                    // Stale ids are dropped inside the state machine
                    self.handle_message(msg);
                }
            }

            // Check for an expired debounce timer
            if let Some(delay) = self.scheduled_search_delay {
                if let Some(timer) = self.last_search_timer {
                    if timer.elapsed() >= Duration::from_millis(delay) {
                        self.scheduled_search_delay = None;
                        self.last_search_timer = None;
                        self.execute_search();
                    }
                }
            }

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(MESSAGE_CLEAR_DELAY_MS) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_input(key);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Double Ctrl+C exits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus("Press Ctrl+C again to exit".to_string()));
            self.message_timer = Some(Instant::now());
            return;
        }

        // Esc unselects first, then dismisses
        if key.code == KeyCode::Esc {
            if self.state.ui.selection.is_some() {
                self.handle_message(Message::Unselect);
            } else {
                self.should_quit = true;
            }
            return;
        }

        let message = match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_result_list_mut().handle_key(key),
            KeyCode::Char('y' | 'l' | 'g')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.renderer.get_action_bar_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                // A new keystroke restarts the debounce timer
                self.last_search_timer = Some(Instant::now());
                self.scheduled_search_delay = Some(delay);
            }
            Command::CopyToClipboard(text) => {
                let status = match self.copy_to_clipboard(&text) {
                    Ok(()) => format!("Copied {text}"),
                    Err(e) => format!("Failed to copy: {e}"),
                };
                self.handle_message(Message::SetStatus(status));
                self.message_timer = Some(Instant::now());
            }
            Command::ShowMessage(msg) => {
                self.handle_message(Message::SetStatus(msg));
                self.message_timer = Some(Instant::now());
            }
            Command::ClearMessage => {
                self.message_timer = None;
            }
            Command::Accept => {
                self.outcome = self.state.ui.selection.clone();
                self.should_quit = true;
            }
        }
    }

    /// Issues the debounced query, if it still qualifies. The term is
    /// re-checked here so shrinking below the minimum length during the
    /// debounce window cancels the pending search.
    fn execute_search(&mut self) {
        let Some(term) = self.state.pending_term() else {
            self.state.search.is_searching = false;
            return;
        };

        self.current_search_id += 1;
        self.state.search.current_search_id = self.current_search_id;
        self.state.search.is_searching = true;

        if let Some(sender) = &self.search_sender {
            let request = SearchRequest {
                id: self.current_search_id,
                term,
            };
            let _ = sender.send(request);
        }
    }

    fn start_search_worker(&self) -> (Sender<SearchRequest>, Receiver<SearchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let search_service = self.search_service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = search_service.search(request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        (request_tx, response_rx)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            self.pipe_to_command("pbcopy", &[], text)
        }

        #[cfg(target_os = "linux")]
        {
            self.pipe_to_command("xclip", &["-selection", "clipboard"], text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            let _ = text;
            Err(anyhow::anyhow!("Clipboard not supported on this platform"))
        }
    }

    #[cfg(any(target_os = "macos", target_os = "linux"))]
    fn pipe_to_command(&self, program: &str, args: &[&str], text: &str) -> Result<()> {
        use std::process::{Command as Process, Stdio};

        let mut child = Process::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn {program}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            use std::io::Write;
            stdin
                .write_all(text.as_bytes())
                .with_context(|| format!("Failed to write to {program}"))?;
        }

        child
            .wait()
            .with_context(|| format!("Failed to wait for {program}"))?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }
}
