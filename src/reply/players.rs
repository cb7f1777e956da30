// src/reply/players.rs
use crate::core::sanitize::title_case;
use crate::query::FantasyMatch;
use crate::store::PlayerRecord;

fn or_na<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| s!("N/A"))
}

pub fn render_profile(p: &PlayerRecord) -> String {
    format!(
        "**Name:** {}\n- **Age:** {}\n- **Position:** {}\n- **Team:** {}\n- **College:** {}\n- **Years in NFL:** {}",
        title_case(&p.full_name),
        or_na(p.age),
        p.position.as_ref().map(|pos| pos.as_str()).unwrap_or("N/A"),
        p.team.as_deref().unwrap_or("N/A"),
        or_na(p.college.as_deref()),
        or_na(p.years_experience)
    )
}

/// Numbered candidate list; numbers are what the front end accepts back.
pub fn render_choices(shown: &[PlayerRecord], remaining: usize) -> String {
    let mut lines = vec![s!("Multiple players found (be more specific):")];
    lines.extend(shown.iter().enumerate().map(|(i, p)| {
        format!("{}. {} ({}, {})", i + 1, title_case(&p.full_name), p.position_label(), p.team_label())
    }));
    if remaining > 0 {
        lines.push(format!("...and {remaining} more"));
    }
    lines.join("\n")
}

/// "Josh Allen (QB, BUF): **30.1 PPR**"
pub fn render_fantasy(m: &FantasyMatch) -> String {
    format!(
        "{} ({}, {}): **{} PPR**",
        m.player.full_name,
        m.player.position_label(),
        m.player.team_label(),
        m.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::players::fixtures::player;

    #[test]
    fn profile_card() {
        let mut p = player("4984", "josh allen", "QB", Some("BUF"));
        p.college = None;
        let card = render_profile(&p);
        assert!(card.starts_with("**Name:** Josh Allen\n"));
        assert!(card.contains("- **Position:** QB"));
        assert!(card.contains("- **College:** N/A"));
        assert!(card.contains("- **Years in NFL:** 6"));
    }

    #[test]
    fn choices_are_numbered() {
        let shown = vec![player("1466", "Josh Allen", "DE", Some("JAX")), player("4984", "Josh Allen", "QB", None)];
        let text = render_choices(&shown, 2);
        assert!(text.contains("1. Josh Allen (DE, JAX)"));
        assert!(text.contains("2. Josh Allen (QB, FA)"));
        assert!(text.ends_with("...and 2 more"));
    }

    #[test]
    fn fantasy_line() {
        let m = FantasyMatch { player: player("4984", "Josh Allen", "QB", Some("BUF")), points: 30.1 };
        assert_eq!(render_fantasy(&m), "Josh Allen (QB, BUF): **30.1 PPR**");
    }
}
