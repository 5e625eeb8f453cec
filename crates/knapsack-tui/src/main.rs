mod app;
mod progress;
mod render;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use progress::ProgressStore;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use theme::Theme;

/// Knapsack Quest: an interactive 0/1 knapsack puzzle game
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Jump back to an already reached level
    #[arg(short, long)]
    level: Option<u8>,

    /// Use a specific save file instead of the platform data directory
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Color theme: dark or light
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let theme_name: &'static str = if args.theme == "light" { "light" } else { "dark" };
    let theme = Theme::by_name(&args.theme).unwrap_or_else(|| {
        eprintln!("Unknown theme '{}', using dark", args.theme);
        Theme::dark()
    });
    let store = match args.save_file {
        Some(path) => ProgressStore::at(path),
        None => ProgressStore::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut app = App::new(store, theme, theme_name, args.level);
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Release events would double-fire on Windows terminals
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Ctrl+C quits, saving like a normal quit
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    app.save_progress();
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        app.tick();
    }

    Ok(())
}
