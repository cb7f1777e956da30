// src/reply/scores.rs
use crate::core::time::to_eastern;
use crate::specs::scoreboard::{Game, GameState};

/// Scoreboard grouped as in progress, final, scheduled. `team` filters by
/// display-name substring.
pub fn render(games: &[Game], team: Option<&str>) -> String {
    if games.is_empty() {
        return s!("🏈 No NFL games scheduled or in progress today.");
    }

    let shown: Vec<&Game> = games
        .iter()
        .filter(|g| team.is_none_or(|t| g.involves(t)))
        .collect();
    if shown.is_empty() {
        return format!("🏈 No games found for '{}'.", team.unwrap_or_default());
    }

    let mut out = vec![s!("🏈 **NFL Scoreboard**\n")];
    for (state, heading) in [
        (GameState::InProgress, "🟧 **IN PROGRESS**"),
        (GameState::Final, "🟥 **FINAL**"),
        (GameState::Scheduled, "🟩 **SCHEDULED**"),
    ] {
        let lines: Vec<String> = shown
            .iter()
            .filter(|g| g.state == state)
            .map(|g| format!("- {}", line(g)))
            .collect();
        if lines.is_empty() {
            continue;
        }
        if out.len() > 1 {
            out.push(s!());
        }
        out.push(s!(heading));
        out.extend(lines);
    }
    out.join("\n")
}

/// "Arizona Cardinals 28 @ Buffalo Bills 34 (Sun, Sep 08 01:00 PM ET, Final)"
pub fn line(g: &Game) -> String {
    let when = to_eastern(g.date.as_ref());
    let mut s = format!("{} {} @ {} {} ({when}", g.away.name, g.away.score, g.home.name, g.home.score);
    if !g.detail.is_empty() {
        s.push_str(", ");
        s.push_str(&g.detail);
    }
    s.push(')');
    s
}
