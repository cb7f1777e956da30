// src/specs/news.rs
//! Readers for the news sources: ESPN's JSON article list and plain RSS 2.0
//! feeds (Google News, Yahoo, ProFootballTalk).

use serde::Deserialize;
use serde_json::Value;

use crate::core::Fetch;
use crate::core::json::{arr, at, first_str};
use crate::core::sanitize::strip_tags;
use crate::error::{FetchError, FetchResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Espn,
    Google,
    Yahoo,
    Pft,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::Espn => "ESPN",
            Source::Google => "Google",
            Source::Yahoo => "Yahoo",
            Source::Pft => "PFT",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub description: String,
    pub source: Source,
}

impl Article {
    /// Lowercased title, description and link: the text relevance is scored on.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.link).to_lowercase()
    }
}

pub fn fetch_espn(fetcher: &dyn Fetch, url: &str) -> FetchResult<Vec<Article>> {
    let payload = fetcher.get_json(url)?;
    Ok(parse_espn(&payload))
}

pub fn parse_espn(payload: &Value) -> Vec<Article> {
    let mut items = arr(payload, "articles");
    if items.is_empty() {
        items = arr(payload, "items");
    }
    items
        .iter()
        .map(|it| {
            let web = at(it, &["links", "web", "href"]).and_then(Value::as_str).unwrap_or("");
            let link = if web.is_empty() { first_str(it, &["canonical", "link"]) } else { web };
            Article {
                title: s!(first_str(it, &["headline", "title"])),
                link: s!(link),
                description: s!(first_str(it, &["description", "summary"])),
                source: Source::Espn,
            }
        })
        .collect()
}

pub fn fetch_rss(fetcher: &dyn Fetch, url: &str, source: Source) -> FetchResult<Vec<Article>> {
    let body = fetcher.get_text(url)?;
    parse_rss(&body, source).map_err(|e| FetchError::Decode { url: s!(url), message: e.to_string() })
}

#[derive(Debug, Default, Deserialize)]
struct Rss {
    #[serde(default)]
    channel: Channel,
}

#[derive(Debug, Default, Deserialize)]
struct Channel {
    #[serde(default)]
    item: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
struct Item {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    description: String,
}

pub fn parse_rss(xml: &str, source: Source) -> Result<Vec<Article>, quick_xml::DeError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss
        .channel
        .item
        .into_iter()
        .map(|it| Article {
            title: it.title.trim().to_string(),
            link: it.link.trim().to_string(),
            description: strip_tags(&it.description),
            source,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn espn_articles_prefer_web_link() {
        let payload = json!({ "articles": [
            { "headline": "Bills clinch", "description": "AFC East", "links": { "web": { "href": "https://espn/1" } } },
            { "title": "Jets fall", "canonical": "https://espn/2" }
        ]});
        let arts = parse_espn(&payload);
        assert_eq!(arts[0].link, "https://espn/1");
        assert_eq!(arts[1].title, "Jets fall");
        assert_eq!(arts[1].link, "https://espn/2");
        assert!(parse_espn(&json!({})).is_empty());
    }

    #[test]
    fn reads_rss_items_between_channel_fields() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Feed</title>
  <item><title>Giants sign kicker</title><link>https://x/1</link>
        <description><![CDATA[<p>Big <b>Blue</b> moves</p>]]></description></item>
  <link>https://x</link>
  <item><title>Patriots news</title><link>https://x/2</link></item>
</channel></rss>"#;
        let arts = parse_rss(xml, Source::Pft).unwrap();
        assert_eq!(arts.len(), 2);
        assert_eq!(arts[0].description, "Big Blue moves");
        assert_eq!(arts[1].source, Source::Pft);
        assert_eq!(arts[1].description, "");
    }

    #[test]
    fn broken_rss_is_an_error() {
        assert!(parse_rss("<rss><channel><item>", Source::Yahoo).is_err());
    }
}
