//! TUI application state and logic

use crate::service::PuzzleService;
use crate::session::{SessionEngine, SessionStatus};
use crate::store::ProfileStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the grid shakes after an incorrect guess
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Words per grid row
pub const GRID_COLUMNS: usize = 4;

/// Poll interval so the shake can expire without a key press
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Instructions,
    Playing,
}

/// Application state
pub struct App<P, S> {
    pub engine: SessionEngine<P, S>,
    pub screen: Screen,
    /// Index of the highlighted word in display order
    pub cursor: usize,
    /// A start was requested and runs after the loading frame is drawn
    pub pending_start: bool,
    pub shake_until: Option<Instant>,
    pub should_quit: bool,
}

impl<P: PuzzleService, S: ProfileStore> App<P, S> {
    #[must_use]
    pub const fn new(engine: SessionEngine<P, S>) -> Self {
        Self {
            engine,
            screen: Screen::Home,
            cursor: 0,
            pending_start: false,
            shake_until: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_start || self.engine.status() == SessionStatus::Loading
    }

    /// Ask for a new session; the fetch happens on the next loop turn
    pub fn request_start(&mut self) {
        self.screen = Screen::Playing;
        self.pending_start = true;
        self.cursor = 0;
    }

    /// Run a requested start, if any
    pub async fn run_pending_start(&mut self) {
        if self.pending_start {
            self.pending_start = false;
            self.engine.start_session().await;
            self.cursor = 0;
        }
    }

    pub fn go_home(&mut self) {
        self.engine.return_home();
        self.screen = Screen::Home;
        self.shake_until = None;
    }

    /// Move the cursor within the grid, clamped to its edges
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let count = self.engine.words().len();
        if count == 0 {
            self.cursor = 0;
            return;
        }

        let row = (self.cursor / GRID_COLUMNS) as isize + dy;
        let col = (self.cursor % GRID_COLUMNS) as isize + dx;
        let max_row = ((count - 1) / GRID_COLUMNS) as isize;

        let row = row.clamp(0, max_row) as usize;
        let col = col.clamp(0, GRID_COLUMNS as isize - 1) as usize;
        self.cursor = (row * GRID_COLUMNS + col).min(count - 1);
    }

    pub fn toggle_at_cursor(&mut self) {
        if let Some(word) = self.engine.words().get(self.cursor).cloned() {
            self.engine.select_word(&word);
        }
    }

    pub async fn submit(&mut self) {
        let outcome = self.engine.submit().await;
        if outcome.is_incorrect_guess() {
            self.shake_until = Some(Instant::now() + SHAKE_DURATION);
        }
        self.move_cursor(0, 0);
    }

    /// Apply one key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('p') => self.screen = Screen::Instructions,
                _ => {}
            },
            Screen::Instructions => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') => self.request_start(),
                KeyCode::Esc => self.screen = Screen::Home,
                _ => {}
            },
            Screen::Playing => self.handle_playing_key(key).await,
        }
    }

    async fn handle_playing_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.engine.status() {
            SessionStatus::InProgress => match key.code {
                KeyCode::Left => self.move_cursor(-1, 0),
                KeyCode::Right => self.move_cursor(1, 0),
                KeyCode::Up => self.move_cursor(0, -1),
                KeyCode::Down => self.move_cursor(0, 1),
                KeyCode::Char(' ') => self.toggle_at_cursor(),
                KeyCode::Enter => self.submit().await,
                KeyCode::Char('s') => {
                    self.engine.shuffle();
                }
                KeyCode::Char('d') => {
                    self.engine.deselect_all();
                }
                KeyCode::Esc => self.go_home(),
                _ => {}
            },
            SessionStatus::Won | SessionStatus::Lost => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b')) {
                    self.go_home();
                }
            }
            // Fetch failed: offer a retry
            SessionStatus::NotStarted => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.request_start(),
                KeyCode::Esc => self.go_home(),
                _ => {}
            },
            SessionStatus::Loading => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<P: PuzzleService, S: ProfileStore>(app: App<P, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B, P, S>(terminal: &mut Terminal<B>, mut app: App<P, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: PuzzleService,
    S: ProfileStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.pending_start {
            app.run_pending_start().await;
            continue;
        }

        // Wake up periodically so an expired shake gets redrawn
        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key).await;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
