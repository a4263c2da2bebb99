use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::model::{BoardConfig, TaskId};
use crate::ops::{Board, BoardView, Notice};
use crate::remote::TaskGateway;
use crate::sync::{Completion, SyncDispatcher, SyncOp};

use super::input;
use super::render;
use super::theme::Theme;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list, single-key actions
    Navigate,
    /// Typing into the shared draft input
    Input,
}

/// A notice on display in the status row
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Main application state
pub struct App {
    pub board: Board,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Byte offset of the text cursor inside the draft
    pub draft_cursor: usize,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub toast: Option<Toast>,
    pub toast_duration: Duration,
    /// Remote calls requested by input handlers, drained by the event loop
    pub outbox: Vec<SyncOp>,
    /// Remote calls still running (for the header indicator)
    pub in_flight: usize,
}

impl App {
    pub fn new(board: Board, config: &BoardConfig) -> Self {
        App {
            board,
            mode: Mode::Navigate,
            theme: Theme::from_config(&config.ui),
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            toast: None,
            toast_duration: Duration::from_secs(config.ui.toast_secs),
            outbox: Vec::new(),
            in_flight: 0,
        }
    }

    /// Id of the task under the cursor, if the visible list is non-empty
    pub fn selected_task_id(&self) -> Option<TaskId> {
        BoardView::of(&self.board)
            .visible
            .get(self.cursor)
            .map(|t| t.id)
    }

    pub fn visible_len(&self) -> usize {
        BoardView::of(&self.board).visible.len()
    }

    /// Keep the cursor on a visible row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Keep the text cursor inside the draft after the board rewrites it
    pub fn clamp_draft_cursor(&mut self) {
        let draft = self.board.draft();
        if self.draft_cursor > draft.len() || !draft.is_char_boundary(self.draft_cursor) {
            self.draft_cursor = draft.len();
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.toast = Some(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire_toast(&mut self, now: Instant) {
        if let Some(toast) = &self.toast
            && now.duration_since(toast.shown_at) >= self.toast_duration
        {
            self.toast = None;
        }
    }

    /// Queue the remote call for a submit, if the draft is not blank
    pub fn submit(&mut self) {
        if let Some(op) = self.board.submit_draft() {
            self.outbox.push(op);
        }
    }

    /// Fold a finished remote call into the board
    pub fn apply_completion(&mut self, completion: Completion) {
        if let Some(notice) = self.board.apply(completion) {
            self.notify(notice);
        }
        self.clamp_cursor();
        self.clamp_draft_cursor();
    }
}

/// Run the TUI application
pub async fn run(
    config: &BoardConfig,
    gateway: Arc<dyn TaskGateway>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dispatcher, completions) = SyncDispatcher::new(gateway);

    let mut board = Board::new();
    board.set_legacy_update_payload(config.compat.legacy_update_payload);
    let mut app = App::new(board, config);

    let _seed = dispatcher.load_seed(config.remote.seed_limit)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &dispatcher, completions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if dispatcher.in_flight() > 0 {
        tracing::info!(pending = dispatcher.in_flight(), "exiting with remote calls in flight");
    }
    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &SyncDispatcher,
    mut completions: mpsc::UnboundedReceiver<Completion>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let stop_input = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop_input);

    // crossterm reads block, so they live on a blocking thread
    tokio::task::spawn_blocking(move || {
        while !stop_flag.load(Ordering::Relaxed) {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to poll terminal events");
                    break;
                }
            }
        }
    });

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let result = loop {
        app.in_flight = dispatcher.in_flight();
        if let Err(e) = terminal.draw(|frame| render::render(frame, app)) {
            break Err(e.into());
        }

        tokio::select! {
            _ = tick.tick() => {
                app.expire_toast(Instant::now());
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        input::handle_key(app, key);
                    }
                    Some(_) => {}
                    None => break Ok(()),
                }
            }
            Some(completion) = completions.recv() => {
                app.apply_completion(completion);
            }
        }

        for op in app.outbox.drain(..) {
            dispatcher.dispatch(op);
        }

        if app.should_quit {
            break Ok(());
        }
    };

    stop_input.store(true, Ordering::Relaxed);
    result
}
