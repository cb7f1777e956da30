// src/reply/standings.rs
//! Single-team record and the league table with playoff projection.

use crate::specs::standings::{Conference, Standings, TeamStanding};

const PLAYOFF_SEEDS: usize = 7;
const BUBBLE_SEEDS: usize = 12;
const TRENDING_SHOWN: usize = 5;

/// ↑ at .700 and above, ↓ at .350 and below.
pub fn trend(pct: f64) -> &'static str {
    if pct >= 0.700 {
        "↑"
    } else if pct <= 0.350 {
        "↓"
    } else {
        "•"
    }
}

pub fn clinch_marker(t: &TeamStanding) -> &'static str {
    if t.clinched_division {
        "🏆"
    } else if t.clinched_playoff {
        "🔒"
    } else {
        ""
    }
}

pub fn render_team(t: &TeamStanding) -> String {
    let mut out = format!(
        "📊 **{} Standings**\n\n{} ({:.3}) {}{}",
        t.name,
        t.record(),
        t.pct,
        trend(t.pct),
        clinch_marker(t)
    );
    if let Some(rank) = t.division_rank {
        out.push_str(&format!("\nDivision rank: {rank}"));
    }
    out.push_str(&format!("\nStrength of Schedule: **{:.3}**", t.strength_of_schedule));
    out
}

/// Team lookup by display-name substring or abbreviation.
pub fn render_for(standings: &Standings, team: &str) -> String {
    match standings.find(team) {
        Some(t) => render_team(t),
        None => format!("No standings found for '{team}'."),
    }
}

pub fn render_league(standings: &Standings) -> String {
    if standings.is_empty() {
        return s!("Standings unavailable.");
    }

    let mut blocks: Vec<String> = standings
        .groups
        .iter()
        .filter(|g| !g.entries.is_empty())
        .map(|g| {
            let lines: Vec<String> = g
                .entries
                .iter()
                .map(|t| format!("{}: **{}** ({:.3})", t.name, t.record(), t.pct))
                .collect();
            format!("### 🏈 {}\n{}", g.name, lines.join("\n"))
        })
        .collect();

    for conf in Conference::ALL {
        let table = standings.conference(conf);
        blocks.push(playoff_block(conf, &table));
        if let Some(wc) = wildcard_block(conf, &table) {
            blocks.push(wc);
        }
        blocks.push(trending_block(conf, &table));
    }
    blocks.join("\n\n")
}

fn playoff_block(conf: Conference, table: &[&TeamStanding]) -> String {
    if table.is_empty() {
        return format!("## 🔥 {conf} Playoff Projection\n\n_No data_");
    }
    let lines: Vec<String> = table
        .iter()
        .take(PLAYOFF_SEEDS)
        .enumerate()
        .map(|(i, t)| {
            format!(
                "**{}. {}** {} ({:.3}) {}{}",
                i + 1,
                t.name,
                t.record(),
                t.pct,
                trend(t.pct),
                clinch_marker(t)
            )
        })
        .collect();
    format!("## 🔥 {conf} Playoff Projection\n\n{}", lines.join("\n"))
}

fn wildcard_block(conf: Conference, table: &[&TeamStanding]) -> Option<String> {
    let bubble: Vec<String> = table
        .iter()
        .enumerate()
        .skip(PLAYOFF_SEEDS)
        .take(BUBBLE_SEEDS - PLAYOFF_SEEDS)
        .map(|(i, t)| format!("- {}. {}: {} ({:.3}) {}", i + 1, t.name, t.record(), t.pct, trend(t.pct)))
        .collect();
    (!bubble.is_empty()).then(|| format!("### 🌟 {conf} Wild Card Race (Seeds 8-12)\n{}", bubble.join("\n")))
}

fn trending_block(conf: Conference, table: &[&TeamStanding]) -> String {
    let list = |arrow: &str| {
        let lines: Vec<String> = table
            .iter()
            .filter(|t| trend(t.pct) == arrow)
            .take(TRENDING_SHOWN)
            .map(|t| format!("- {} ({:.3})", t.name, t.pct))
            .collect();
        if lines.is_empty() { s!("_(none)_") } else { lines.join("\n") }
    };
    format!(
        "### 📈 {conf} Trending Up\n{}\n\n### 📉 {conf} Trending Down\n{}",
        list("↑"),
        list("↓")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::standings::fixtures::{entry, league};
    use crate::specs::standings::parse;

    #[test]
    fn team_line_has_record_and_markers() {
        let st = parse(&league(vec![entry("Buffalo Bills", "BUF", 9, 8, 0.529)], vec![]));
        let text = render_for(&st, "bills");
        assert!(text.starts_with("📊 **Buffalo Bills Standings**"));
        assert!(text.contains("9-8-0 (0.529) •"));
        assert!(text.contains("Strength of Schedule: **0.512**"));
        assert_eq!(render_for(&st, "jets"), "No standings found for 'jets'.");
    }

    #[test]
    fn trend_thresholds() {
        assert_eq!(trend(0.700), "↑");
        assert_eq!(trend(0.350), "↓");
        assert_eq!(trend(0.5), "•");
    }

    #[test]
    fn league_table_projects_seven_and_lists_the_bubble() {
        let afc = (0..10)
            .map(|i| entry(&format!("Team {i}"), &format!("T{i}"), 10 - i, 7 + i, (10 - i) as f64 / 17.0))
            .collect();
        let text = render_league(&parse(&league(afc, vec![])));
        assert!(text.contains("### 🏈 AFC East"));
        assert!(text.contains("**1. Team 0** 10-7-0"));
        assert!(text.contains("**7. Team 6**"));
        assert!(!text.contains("**8. Team 7**"));
        assert!(text.contains("Wild Card Race (Seeds 8-12)\n- 8. Team 7"));
        assert!(text.contains("## 🔥 NFC Playoff Projection\n\n_No data_"));
        assert!(text.contains("### 📈 NFC Trending Up\n_(none)_"));
    }

    #[test]
    fn empty_standings() {
        assert_eq!(render_league(&Standings::default()), "Standings unavailable.");
    }
}
