//! String utilities: character histograms and word manipulation.
//!
//! Everything here walks the input character by character.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Occurrences of one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCount {
    pub character: char,
    pub count: usize,
}

/// Count every character, most frequent first; ties are ordered by character.
pub fn char_histogram(text: &str) -> Vec<CharCount> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut entries: Vec<CharCount> = counts
        .into_iter()
        .map(|(character, count)| CharCount { character, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.character.cmp(&b.character)));
    entries
}

/// Render histogram entries as `c - # # #` lines.
pub fn render_histogram(entries: &[CharCount], bar: char) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let bars = vec![bar.to_string(); entry.count].join(" ");
            format!("{} - {}", entry.character, bars)
        })
        .collect()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}

/// Turn `"Last, First"` into `"First Last"`.
pub fn invert_name(name: &str) -> CoreResult<String> {
    let (last, first) = name
        .split_once(',')
        .ok_or_else(|| CoreError::InvalidName(name.to_string()))?;

    let (last, first) = (last.trim(), first.trim());
    if last.is_empty() || first.is_empty() {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(format!("{} {}", first, last))
}

/// Split `text` on every `separator`, keeping empty chunks like `str::split`.
pub fn split_components(text: &str, separator: char) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    for c in text.chars() {
        if c == separator {
            chunks.push(std::mem::take(&mut chunk));
        } else {
            chunk.push(c);
        }
    }
    chunks.push(chunk);
    chunks
}

/// Reverse each space-separated word, keeping the spaces where they were.
pub fn reverse_words(text: &str) -> String {
    let mut sentence = String::with_capacity(text.len());
    let mut word = String::new();
    for c in text.chars() {
        if c == ' ' {
            sentence.extend(word.chars().rev());
            sentence.push(c);
            word.clear();
        } else {
            word.push(c);
        }
    }
    sentence.extend(word.chars().rev());
    sentence
}
