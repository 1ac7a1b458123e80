//! Candidate item sources
//!
//! The picker is constructed from an ordered list of unique strings. That
//! list comes from the built-in default set or from a file (`.txt` with one
//! item per line, `.json` with an array of strings).

use crate::picker::Item;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Built-in candidate list used when no items file is given
pub fn default_items() -> Vec<Item> {
    [
        "Apple",
        "Apricot",
        "Avocado",
        "banana",
        "Blackberry",
        "Blueberry",
        "Cherry",
        "Coconut",
        "Cranberry",
        "Dragonfruit",
        "Fig",
        "Grape",
        "Grapefruit",
        "Guava",
        "Kiwi",
        "Lemon",
        "Lime",
        "Lychee",
        "Mango",
        "Melon",
        "Nectarine",
        "Orange",
        "Papaya",
        "Passionfruit",
        "Peach",
        "Pear",
        "Pineapple",
        "Plum",
        "Pomegranate",
        "Raspberry",
        "Strawberry",
        "Tangerine",
        "Watermelon",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Load a candidate list from a file, dispatching on extension
pub fn load_items(file_path: &str) -> Result<Vec<Item>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", file_path));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let items = match extension.as_str() {
        "json" => load_json_items(path)
            .with_context(|| format!("Failed to load JSON items file: {}", file_path))?,
        "txt" | "" => load_text_items(path)
            .with_context(|| format!("Failed to load items file: {}", file_path))?,
        _ => return Err(anyhow::anyhow!("Unsupported file type: {}", extension)),
    };

    if items.is_empty() {
        return Err(anyhow::anyhow!("No items found in {}", file_path));
    }

    Ok(dedup_items(items))
}

/// One item per line; blank lines are skipped
fn load_text_items(path: &Path) -> Result<Vec<Item>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// A JSON array of strings
fn load_json_items(path: &Path) -> Result<Vec<Item>> {
    let contents = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&contents)?;
    Ok(items)
}

/// Drop duplicate values, keeping first occurrences in order.
///
/// Selection and removal match by value, so duplicate candidates would be
/// ambiguous; the pool is normalized up front instead.
pub fn dedup_items(items: Vec<Item>) -> Vec<Item> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(items.len());
    let mut dropped = 0usize;
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!(target: "items", "Dropped {} duplicate item(s) from candidate list", dropped);
    }
    unique
}
