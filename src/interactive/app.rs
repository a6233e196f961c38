//! TUI application state and logic

use crate::calendar;
use crate::config::GameConfig;
use crate::game::{GameSession, KeyInput, RoundState, SubmitOutcome, TimerKind, Timers};
use crate::storage::KeyValueStore;
use crate::wordlists::Dictionary;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Longest wait between redraws when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a, D: Dictionary + ?Sized, S: KeyValueStore> {
    pub session: GameSession<'a, D, S>,
    pub timers: Timers,
    /// Selected submitted cell as `(row, position)`
    pub cursor: Option<(usize, usize)>,
    pub messages: Vec<Message>,
    /// Whether the delayed end-of-round view is showing
    pub show_round_end: bool,
    pub should_quit: bool,
    /// Whether the day follows the calendar; false for a pinned day
    pub follow_calendar: bool,
    start_date: NaiveDate,
    invalid_word_flash: Duration,
    reveal_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized, S: KeyValueStore> App<'a, D, S> {
    #[must_use]
    pub fn new(session: GameSession<'a, D, S>, config: &GameConfig, follow_calendar: bool) -> Self {
        let show_round_end = session.state().is_terminal();

        let mut app = Self {
            session,
            timers: Timers::new(),
            cursor: None,
            messages: Vec::new(),
            show_round_end,
            should_quit: false,
            follow_calendar,
            start_date: config.start_date,
            invalid_word_flash: config.invalid_word_flash(),
            reveal_delay: config.reveal_delay(),
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        let day = self.session.day();
        let text = match self.session.state() {
            RoundState::Playing => format!("Day {day}: type a guess and press Enter"),
            RoundState::Won => format!("Day {day} is already solved. Come back tomorrow!"),
            RoundState::Lost => format!("Day {day} is over. Come back tomorrow!"),
        };
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('l') if ctrl => {
                self.session.clear_letter_colors();
                if self.session.state() == RoundState::Playing {
                    self.add_message("Letter colors cleared", MessageStyle::Info);
                }
            }
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Backspace => self.apply(KeyInput::Backspace, now),
            KeyCode::Enter => self.apply(KeyInput::Enter, now),
            KeyCode::Char(c) => {
                if let Some(input) = KeyInput::from_char(c) {
                    self.apply(input, now);
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, input: KeyInput, now: Instant) {
        let Some(outcome) = self.session.handle_key(input) else {
            return;
        };

        match outcome {
            SubmitOutcome::Ignored | SubmitOutcome::Accepted => {}
            SubmitOutcome::InvalidWord { newly_raised } => {
                if newly_raised {
                    self.timers
                        .schedule(TimerKind::InvalidWordFlash, now, self.invalid_word_flash);
                    self.add_message("Not in word list", MessageStyle::Error);
                }
            }
            SubmitOutcome::Won | SubmitOutcome::Lost => {
                self.cursor = None;
                self.timers
                    .schedule(TimerKind::EndOfRoundReveal, now, self.reveal_delay);
            }
        }
    }

    /// Move the selection over submitted cells, selecting the newest row first
    fn move_cursor(&mut self, rows: isize, positions: isize) {
        if self.session.state() != RoundState::Playing {
            return;
        }
        let row_count = self.session.submitted_guesses().len();
        if row_count == 0 {
            return;
        }
        let width = self.session.solution_length();

        self.cursor = Some(match self.cursor {
            None => (row_count - 1, 0),
            Some((row, position)) => (
                row.saturating_add_signed(rows).min(row_count - 1),
                position.saturating_add_signed(positions).min(width - 1),
            ),
        });
    }

    /// Left click at a screen position; a click on a submitted cell selects
    /// it and cycles its color
    pub fn handle_click(&mut self, column: u16, row: u16, screen: Rect) {
        if self.session.state() != RoundState::Playing {
            return;
        }
        let hit = super::rendering::cell_at(
            screen,
            self.session.submitted_guesses().len(),
            self.session.solution_length(),
            column,
            row,
        );
        if let Some((row, position)) = hit {
            self.cursor = Some((row, position));
            self.session.change_letter_color(row, position);
        }
    }

    fn toggle_selected(&mut self) {
        if let Some((row, position)) = self.cursor {
            self.session.change_letter_color(row, position);
        }
    }

    /// Fire due timers and follow the calendar
    pub fn tick(&mut self, now: Instant, today: i64) {
        for kind in self.timers.fire_due(now) {
            match kind {
                TimerKind::InvalidWordFlash => self.session.clear_invalid_word(),
                TimerKind::EndOfRoundReveal => self.reveal_round_end(),
            }
        }

        if self.follow_calendar && today != self.session.day() {
            info!(from = self.session.day(), to = today, "Calendar day rolled over");
            self.timers.cancel_all();
            self.session.on_day_change(today);
            self.cursor = None;
            self.show_round_end = self.session.state().is_terminal();
            self.messages.clear();
            self.greet();
        }
    }

    fn reveal_round_end(&mut self) {
        self.show_round_end = true;
        match self.session.state() {
            RoundState::Won => {
                let rounds = self.session.submitted_guesses().len();
                let celebration = match rounds {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4..=6 => "🎉 NICE WORK! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            RoundState::Lost => {
                let answer = self
                    .session
                    .revealed_solution()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(&format!("The answer was {answer}"), MessageStyle::Error);
            }
            RoundState::Playing => {}
        }
    }

    /// How long the event loop may block before the next timer is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timers
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }

    fn today(&self) -> i64 {
        if self.follow_calendar {
            calendar::today_index(self.start_date)
        } else {
            self.session.day()
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized, S: KeyValueStore>(app: App<'_, D, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key, Instant::now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    app.handle_click(mouse.column, mouse.row, screen);
                }
                _ => {}
            }
        }

        let today = app.today();
        app.tick(Instant::now(), today);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
