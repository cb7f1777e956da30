// src/core/sanitize.rs

/// Lowercase, keep `[a-z0-9 ]` only, collapse whitespace.
/// Other characters are dropped ("Ja'Marr" → "jamarr"); whitespace of any
/// kind becomes a single space.
pub fn clean_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_whitespace() {
            out.push(' ');
        } else {
            let c = ch.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                out.push(c);
            }
        }
    }
    normalize_ws(&out)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every whole-word occurrence of `phrase` (itself already clean)
/// from `text` (already clean). Returns the collapsed result.
pub fn remove_phrase(text: &str, phrase: &str) -> String {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
    let needle: Vec<&str> = phrase.split(' ').filter(|w| !w.is_empty()).collect();
    if needle.is_empty() || needle.len() > words.len() {
        return words.join(" ");
    }

    let mut kept: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if words[i..].starts_with(&needle) {
            i += needle.len();
        } else {
            kept.push(words[i]);
            i += 1;
        }
    }
    kept.join(" ")
}

/// True if `phrase` occurs in `text` on word boundaries. Both already clean.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
    let needle: Vec<&str> = phrase.split(' ').filter(|w| !w.is_empty()).collect();
    !needle.is_empty() && words.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// Drop markup from feed descriptions: `<p>Bills <b>win</b></p>` → "Bills win".
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => { in_tag = false; out.push(' '); }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// "josh allen" → "Josh Allen"
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => join!(&first.to_uppercase().to_string(), cs.as_str()),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
