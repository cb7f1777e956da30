// src/reply/news.rs
//! Multi-source news ranking.
//!
//! The subject expands to a token set (full name, each word, nickname
//! aliases). An article scores 3 per token found on word boundaries, 1 per
//! token found only inside other words, plus one per matching token up to 3.
//! Nothing scoring means the top ESPN headlines are shown instead.

use crate::config::consts::NEWS_ALIASES;
use crate::core::sanitize::title_case;
use crate::specs::news::{Article, Source};

pub fn search_tokens(subject: &str) -> Vec<String> {
    let subject = subject.trim().to_lowercase();
    let mut tokens: Vec<String> = vec![subject.clone()];
    tokens.extend(subject.split_whitespace().map(String::from));

    if let Some(last) = subject.split_whitespace().last() {
        if let Some((_, aliases)) = NEWS_ALIASES.iter().find(|(nick, _)| *nick == last) {
            tokens.extend(aliases.iter().map(|a| s!(*a)));
        }
    }

    let mut seen = std::collections::HashSet::new();
    tokens.retain(|t| !t.is_empty() && seen.insert(t.clone()));
    tokens
}

pub fn score_article(text: &str, tokens: &[String]) -> u32 {
    let text = text.to_lowercase();
    let mut score = 0;
    let mut hits = 0;
    for tok in tokens.iter().filter(|t| !t.is_empty()) {
        if !text.contains(tok.as_str()) {
            continue;
        }
        hits += 1;
        score += if has_word(&text, tok) { 3 } else { 1 };
    }
    score + hits.min(3)
}

/// `needle` occurs with no letter, digit or underscore on either side.
fn has_word(text: &str, needle: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    text.match_indices(needle).any(|(i, m)| {
        let before = text[..i].chars().next_back();
        let after = text[i + m.len()..].chars().next();
        !before.is_some_and(is_word) && !after.is_some_and(is_word)
    })
}

/// Scored articles, best first; ties keep source order.
pub fn rank<'a>(articles: &'a [Article], tokens: &[String], max: usize) -> Vec<(u32, &'a Article)> {
    let mut scored: Vec<(u32, &Article)> = articles
        .iter()
        .map(|a| (score_article(&a.search_text(), tokens), a))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(max);
    scored
}

fn bullet(title: &str, link: &str, star: bool) -> String {
    let title = if title.is_empty() { "Untitled" } else { title };
    let star = if star { "⭐ " } else { "" };
    if link.is_empty() {
        format!("- {star}{title}")
    } else {
        let title = title.replace(']', "\\]");
        format!("- {star}[{title}]({link})")
    }
}

pub fn render_headlines(espn: &[Article], max: usize) -> Option<String> {
    let items: Vec<&Article> = espn.iter().filter(|a| a.source == Source::Espn).take(max).collect();
    if items.is_empty() {
        return None;
    }
    let mut lines = vec![s!("📰 **Top NFL Headlines (ESPN)**\n")];
    lines.extend(items.iter().map(|a| {
        let title = if a.title.is_empty() { a.description.as_str() } else { a.title.as_str() };
        bullet(title, &a.link, false)
    }));
    Some(lines.join("\n"))
}

/// Subject news from every source gathered, falling back to ESPN headlines.
pub fn render(subject: &str, articles: &[Article], max: usize) -> String {
    let ranked = rank(articles, &search_tokens(subject), max);
    if !ranked.is_empty() {
        let mut lines = vec![format!("📰 **{} News (Multi-source)**\n", title_case(subject))];
        lines.extend(ranked.iter().map(|(_, a)| bullet(&a.title, &a.link, true)));
        return lines.join("\n");
    }
    render_headlines(articles, max).unwrap_or_else(|| format!("No recent news found for '{subject}'."))
}
