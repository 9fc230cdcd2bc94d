//! Interactive terminal front end built on `ratatui` and `crossterm`.
//!
//! # Controls
//!
//! * Space: Play/Pause the simulation
//! * Enter: Step forward one generation (when paused)
//! * q: Quit the application

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use sysinfo::{System, SystemExt};

use crate::config::{FRAME_INTERVAL, GRID_PANEL_PERCENT};
use crate::error::Result;
use crate::render::{board_text, ALIVE, DEAD};
use crate::simulation::Simulation;

/// Main application state for the interactive front end.
pub struct App {
    sim: Simulation,
    /// Indicates whether the simulation is currently running
    running: bool,
    /// System information for resource monitoring
    sys: System,
}

impl App {
    /// Creates a paused app over the given simulation.
    pub fn new(sim: Simulation) -> App {
        let mut sys = System::new();
        sys.refresh_memory();
        App {
            sim,
            running: false,
            sys,
        }
    }

    /// The simulation driven by this app.
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Whether generations advance on every tick.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Toggles the simulation between running and paused states.
    fn toggle_running(&mut self) {
        self.running = !self.running;
        info!("simulation {}", if self.running { "resumed" } else { "paused" });
    }

    fn update(&mut self) {
        self.sim.advance();
        self.sys.refresh_memory();
    }

    /// Applies one key press.
    ///
    /// # Returns
    ///
    /// `true` if the application should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char(' ') => self.toggle_running(),
            KeyCode::Enter if !self.running => self.update(),
            _ => {}
        }
        false
    }

    /// Advances one generation if the simulation is running.
    pub fn tick(&mut self) {
        if self.running {
            self.update();
        }
    }
}

/// Text of the statistics panel.
pub fn stats_text(app: &App) -> String {
    let stats = app.sim.stats();
    let memory_used = app.sys.used_memory() / 1024; // Convert to KB
    let memory_total = app.sys.total_memory() / 1024;

    format!(
        "Statistics:\n\
        Generation: {}\n\
        Current Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Birth Rate: {:.2}/gen\n\
        Death Rate: {:.2}/gen\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n",
        stats.generation,
        stats.current_population,
        stats.cells_created,
        stats.cells_destroyed,
        stats.birth_rate(),
        stats.death_rate(),
        memory_used,
        memory_total as f64 / 1024.0,
        if app.running { "Running" } else { "Paused" }
    )
}

/// Draws the game grid.
fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Game of Life [Space: Play/Pause | Enter: Step | q: Quit]");

    let cells = board_text(app.sim.board(), ALIVE, DEAD);
    let paragraph = Paragraph::new(cells).block(block);

    f.render_widget(paragraph, area);
}

/// Draws the statistics panel.
fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats_widget = Paragraph::new(stats_text(app))
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

/// Draws one full frame: grid on the left, statistics on the right.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(GRID_PANEL_PERCENT),
                Constraint::Percentage(100 - GRID_PANEL_PERCENT),
            ]
            .as_ref(),
        )
        .split(f.size());

    draw_grid(f, app, chunks[0]);
    draw_stats(f, app, chunks[1]);
}

/// Raw mode and the alternate screen for as long as the value lives.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        enable_raw_mode()?;
        let terminal = restore_on_err(Self::enter(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        Ok(TerminalSession { terminal })
    }

    fn enter() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }
}

/// Runs `restore` if a setup step after entering raw mode failed.
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the event loop on the given terminal until the user quits.
///
/// Ticks every [`FRAME_INTERVAL`] while running; waits for input in between.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = FRAME_INTERVAL;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

/// Takes over the terminal and runs the interactive front end.
///
/// # Errors
///
/// Returns an error if terminal manipulation fails. The terminal is restored
/// either way.
pub fn run(sim: Simulation) -> Result<()> {
    let mut session = TerminalSession::start()?;
    let mut app = App::new(sim);
    let result = run_app(&mut session.terminal, &mut app);
    info!("quit at generation {}", app.simulation().stats().generation);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::patterns;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let mut board = Board::new(6, 6).unwrap();
        board.place(&patterns::BLINKER, (2, 1));
        App::new(Simulation::new(board))
    }

    #[test]
    fn starts_paused() {
        let mut app = app();
        assert!(!app.is_running());
        app.tick();
        assert_eq!(app.simulation().stats().generation, 0);
    }

    #[test]
    fn enter_steps_only_while_paused() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Enter));
        assert_eq!(app.simulation().stats().generation, 1);

        app.handle_key(KeyCode::Char(' '));
        assert!(app.is_running());
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.simulation().stats().generation, 1);

        app.tick();
        assert_eq!(app.simulation().stats().generation, 2);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn stats_panel_reports_state() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        let text = stats_text(&app);
        assert!(text.contains("Generation: 1\n"));
        assert!(text.contains("Current Population: 3\n"));
        assert!(text.contains("Cells Created: 2\n"));
        assert!(text.contains("Status: Paused"));
    }

    #[test]
    fn grid_uses_plain_cell_characters() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, true);
        let app = App::new(Simulation::new(board));
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let screen = format!("{:?}", terminal.backend().buffer());
        assert!(screen.contains("@@@"));
        assert!(screen.contains("@*@"));
        assert!(!screen.contains('•'));
        assert!(!screen.contains("White"));
    }

    #[test]
    fn failed_setup_restores_terminal() {
        let mut restored = false;
        let result: io::Result<()> = restore_on_err(
            Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || restored = true,
        );
        assert!(result.is_err());
        assert!(restored);

        let mut restored = false;
        let result = restore_on_err(Ok(7), || restored = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn draws_into_small_terminal() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
