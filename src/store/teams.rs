// src/store/teams.rs
//! Team directory: every team reachable by display name, abbreviation, slug
//! and numeric id (all lowercased), each key pointing at the same record.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::sanitize::{clean_text, contains_phrase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: String,
    pub display_name: String,
    pub abbreviation: String,
    pub slug: String,
    pub schedule_url: String,
}

impl TeamRecord {
    /// Lookup keys for this record, lowercased.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = [&self.display_name, &self.abbreviation, &self.slug, &self.id]
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keys.dedup();
        keys
    }

    /// Last word of the display name ("Buffalo Bills" → "bills").
    pub fn mascot(&self) -> String {
        self.display_name
            .split_whitespace()
            .last()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct TeamDirectory {
    records: Vec<Arc<TeamRecord>>,
    index: HashMap<String, usize>,
}

impl TeamDirectory {
    pub fn new(mut records: Vec<TeamRecord>) -> Self {
        records.sort_by(|a, b| id_order(&a.id).cmp(&id_order(&b.id)).then_with(|| a.id.cmp(&b.id)));
        records.dedup_by(|a, b| a.id == b.id);

        let records: Vec<Arc<TeamRecord>> = records.into_iter().map(Arc::new).collect();
        let mut index = HashMap::with_capacity(records.len() * 4);
        for (i, rec) in records.iter().enumerate() {
            for key in rec.keys() {
                index.insert(key, i);
            }
        }
        Self { records, index }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records in id order.
    pub fn records(&self) -> &[Arc<TeamRecord>] { &self.records }

    /// Exact key lookup (lowercased display name, abbreviation, slug or id).
    pub fn get(&self, key: &str) -> Option<Arc<TeamRecord>> {
        self.index
            .get(&key.trim().to_lowercase())
            .map(|&i| Arc::clone(&self.records[i]))
    }

    /// Keys usable for spotting a team inside free text: non-numeric,
    /// cleaned the same way queries are.
    pub fn text_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .index
            .keys()
            .filter(|k| !k.chars().all(|c| c.is_ascii_digit()))
            .map(|k| clean_text(&k.replace('-', " ")))
            .filter(|k| !k.is_empty())
            .collect();
        // longer keys first so "new york jets" beats "jets"
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keys.dedup();
        keys
    }

    /// Resolve free text to a team.
    ///
    /// 1. exact key; 2. query inside display name / slug / abbreviation, or one
    ///    of those as whole words inside the query; 3. cleaned query anywhere in
    ///    the cleaned display name. First hit in id order wins.
    pub fn resolve(&self, query: &str) -> Option<Arc<TeamRecord>> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        if let Some(hit) = self.get(&q) {
            return Some(hit);
        }
        let cq = clean_text(&q);
        if cq.is_empty() {
            return None;
        }
        if let Some(hit) = self.get(&cq) {
            return Some(hit);
        }

        for rec in &self.records {
            let dn = rec.display_name.to_lowercase();
            let ab = rec.abbreviation.to_lowercase();
            let slug = rec.slug.to_lowercase();

            if cq == ab || q == slug {
                return Some(Arc::clone(rec));
            }
            if dn.contains(&q) || (!slug.is_empty() && slug.contains(&q)) || (!ab.is_empty() && ab.contains(&q)) {
                return Some(Arc::clone(rec));
            }
            let clean_dn = clean_text(&dn);
            let clean_slug = clean_text(&slug.replace('-', " "));
            if (!clean_dn.is_empty() && contains_phrase(&cq, &clean_dn))
                || (!clean_slug.is_empty() && contains_phrase(&cq, &clean_slug))
                || (!ab.is_empty() && contains_phrase(&cq, &ab))
            {
                return Some(Arc::clone(rec));
            }
        }

        self.records
            .iter()
            .find(|rec| clean_text(&rec.display_name).contains(&cq))
            .map(Arc::clone)
    }
}

fn id_order(id: &str) -> u64 {
    id.parse::<u64>().unwrap_or(u64::MAX)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn every_key_points_at_the_same_record() {
        let dir = league();
        let by_name = dir.get("buffalo bills").unwrap();
        for key in ["BUF", "buffalo-bills", "2"] {
            assert_eq!(dir.get(key).unwrap(), by_name);
        }
    }

    #[test]
    fn resolve_prefers_exact_key() {
        let dir = league();
        assert_eq!(dir.resolve("NE").unwrap().display_name, "New England Patriots");
        assert_eq!(dir.resolve("bills").unwrap().abbreviation, "BUF");
        assert_eq!(dir.resolve("new england").unwrap().id, "17");
        assert_eq!(dir.resolve("kansas city chiefs schedule").unwrap().id, "12");
    }

    #[test]
    fn reverse_match_needs_whole_words() {
        let dir = league();
        // "ne" sits inside "minnesota" but is not a word of it
        assert_eq!(dir.resolve("minnesota").unwrap().abbreviation, "MIN");
        assert!(dir.resolve("cowboys").is_none());
        assert!(dir.resolve("   ").is_none());
    }

    #[test]
    fn text_keys_skip_ids_and_put_long_keys_first() {
        let keys = league().text_keys();
        assert!(!keys.iter().any(|k| k == "2"));
        let jets_full = keys.iter().position(|k| k == "new york jets").unwrap();
        let nyj = keys.iter().position(|k| k == "nyj").unwrap();
        assert!(jets_full < nyj);
    }
}
