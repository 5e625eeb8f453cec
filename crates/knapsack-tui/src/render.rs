use crate::app::{App, MessageKind};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    if app.show_about {
        render_about(stdout, app)?;
    } else {
        render_game(stdout, app, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_game(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    // Title banner
    let title = "K N A P S A C K   Q U E S T";
    let title_x = term_width.saturating_sub(title.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(title_x, 0),
        SetForegroundColor(theme.title),
        Print(title)
    )?;

    // Status line
    let best = session
        .best_score(session.level())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let completed = if session.is_completed(session.level()) {
        "  [completed]"
    } else {
        ""
    };
    execute!(
        stdout,
        MoveTo(2, 2),
        SetForegroundColor(theme.info),
        Print(format!(
            "Level {}/{}   Capacity: {}   Score: {}   Best: {}{}",
            session.level(),
            session.catalog().max_level(),
            session.capacity(),
            session.score(),
            best,
            completed,
        ))
    )?;

    // Item rows
    let items_y = 4;
    for (i, item) in session.items().iter().enumerate() {
        let y = items_y + i as u16;
        let (marker, color) = if session.is_selected(i) {
            ("[x]", theme.selected)
        } else if session.is_hinted(i) {
            ("[*]", theme.hint)
        } else {
            ("[ ]", theme.item)
        };
        execute!(
            stdout,
            MoveTo(4, y),
            SetForegroundColor(theme.key),
            Print(format!("{}", i + 1)),
            SetForegroundColor(color),
            Print(format!(" {} {}", marker, item))
        )?;
    }

    // Totals panel
    let totals_y = items_y + session.items().len() as u16 + 1;
    let (total_weight, total_value) = session.totals();
    let weight_color = if total_weight > session.capacity() {
        theme.error
    } else {
        theme.fg
    };
    execute!(
        stdout,
        MoveTo(4, totals_y),
        SetForegroundColor(weight_color),
        Print(format!(
            "Total Weight: {} / {}",
            total_weight,
            session.capacity()
        )),
        MoveTo(4, totals_y + 1),
        SetForegroundColor(theme.fg),
        Print(format!("Total Value:  {}", total_value))
    )?;

    // Message line
    if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageKind::Info => theme.info,
            MessageKind::Success => theme.success,
            MessageKind::Error => theme.error,
        };
        execute!(
            stdout,
            MoveTo(4, totals_y + 3),
            SetForegroundColor(color),
            Print(msg)
        )?;
    }

    // Key legend
    execute!(
        stdout,
        MoveTo(2, totals_y + 5),
        SetForegroundColor(theme.border),
        Print("1-5 toggle item | s submit | h hint | r reset | n/p level | a about | t theme | q quit")
    )?;

    Ok(())
}

fn render_about(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        "ABOUT KNAPSACK QUEST",
        "",
        "Objective:",
        "Select items with the highest value without exceeding the weight limit.",
        "",
        "Algorithm: 0/1 Knapsack (Dynamic Programming)",
        "dp[i][w] = max(dp[i-1][w], val[i-1] + dp[i-1][w - wt[i-1]])",
        "Time Complexity: O(n * W)",
        "",
        "Gameplay:",
        "- Press an item's number to pack or unpack it",
        "- [x] selected | [*] optimal hint",
        "- Submit checks your answer, Hint shows one optimal combo",
        "- Levels grow in capacity; progress is saved automatically",
        "",
        "Press any key to return.",
    ];

    for (i, line) in lines.iter().enumerate() {
        let color = if i == 0 { theme.title } else { theme.fg };
        execute!(
            stdout,
            MoveTo(4, 1 + i as u16),
            SetForegroundColor(color),
            Print(line)
        )?;
    }
    Ok(())
}
