use crate::progress::ProgressStore;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use knapsack_core::{Action, Catalog, Direction, Outcome, Progress, Session};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// How to color the message line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// The main application state
pub struct App {
    /// The game session
    pub session: Session,
    /// Color theme
    pub theme: Theme,
    /// Whether the about overlay is showing
    pub show_about: bool,
    /// Message to display, with its color class
    pub message: Option<(String, MessageKind)>,
    /// Message timer (ticks until the message clears)
    message_timer: u32,
    /// Currently active theme name (for cycling)
    theme_name: &'static str,
    /// Save-file store
    store: ProgressStore,
}

impl App {
    /// Build the app: load saved progress (falling back to defaults on
    /// any store failure) and optionally jump back to an already
    /// reached level.
    pub fn new(
        store: ProgressStore,
        theme: Theme,
        theme_name: &'static str,
        start_level: Option<u8>,
    ) -> Self {
        let mut warning = None;
        let mut progress = match store.load() {
            Ok(Some(progress)) => progress,
            Ok(None) => Progress {
                level: knapsack_core::MIN_LEVEL,
                ..Progress::default()
            },
            Err(e) => {
                warning = Some(format!("Starting fresh: {}", e));
                Progress {
                    level: knapsack_core::MIN_LEVEL,
                    ..Progress::default()
                }
            }
        };

        if let Some(level) = start_level {
            if level <= progress.level {
                progress.level = level.max(knapsack_core::MIN_LEVEL);
            } else {
                warning = Some(format!("Level {} not reached yet", level));
            }
        }

        let session = Session::restore(Catalog::builtin(), &progress);
        let mut app = Self {
            session,
            theme,
            show_about: false,
            message: None,
            message_timer: 0,
            theme_name,
            store,
        };
        if let Some(warning) = warning {
            app.show_message(warning, MessageKind::Error);
        }
        app
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: String, kind: MessageKind) {
        self.message = Some((msg, kind));
        self.message_timer = 50; // ~5 seconds at the 100ms poll rate
    }

    /// Count down the message timer (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.show_about {
            // Any key closes the about overlay.
            self.show_about = false;
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.save_progress();
                return AppAction::Quit;
            }

            // Item rows are numbered from 1 on screen
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                self.dispatch(Action::Toggle(index));
            }

            KeyCode::Char('s') | KeyCode::Enter => self.dispatch(Action::Submit),
            KeyCode::Char('h') | KeyCode::Char('?') => self.dispatch(Action::Hint),
            KeyCode::Char('r') => self.dispatch(Action::Reset),

            KeyCode::Char('n') | KeyCode::Right => {
                self.dispatch(Action::ChangeLevel(Direction::Next))
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.dispatch(Action::ChangeLevel(Direction::Previous))
            }

            KeyCode::Char('a') => self.show_about = true,

            KeyCode::Char('t') => {
                (self.theme_name, self.theme) = match self.theme_name {
                    "dark" => ("light", Theme::light()),
                    _ => ("dark", Theme::dark()),
                };
                self.show_message(format!("{} theme", self.theme_name), MessageKind::Info);
            }

            _ => {}
        }

        AppAction::Continue
    }

    /// Run one action through the session and surface its result
    fn dispatch(&mut self, action: Action) {
        match self.session.apply(action) {
            Ok(outcome) => {
                match outcome {
                    Outcome::Toggled { .. } | Outcome::Cleared => {
                        self.message = None;
                        self.message_timer = 0;
                    }
                    Outcome::Optimal { .. } => {
                        self.show_message(outcome.message(), MessageKind::Success)
                    }
                    Outcome::Overweight { .. } | Outcome::Suboptimal { .. } => {
                        self.show_message(outcome.message(), MessageKind::Error)
                    }
                    Outcome::HintShown | Outcome::LevelChanged { .. } => {
                        self.show_message(outcome.message(), MessageKind::Info)
                    }
                }
                if outcome.persist() {
                    self.save_progress();
                }
            }
            Err(e) => self.show_message(e.to_string(), MessageKind::Error),
        }
    }

    /// Write the durable fields; a failed write is a warning, the
    /// in-memory session stays authoritative.
    pub fn save_progress(&mut self) {
        if let Err(e) = self.store.save(&self.session.snapshot()) {
            self.show_message(format!("Progress not saved: {}", e), MessageKind::Error);
        }
    }
}
