//! Output formatting utilities

use crate::application::{DeleteResult, Listing, SearchResult, WriteResult};
use crate::domain::file_layout::filename_for_key;
use crate::domain::{Entry, EntryKey};
use crate::infrastructure::BackendMode;

fn yes_no(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "failed"
    }
}

/// Report where a write landed
pub fn format_write_result(key: &EntryKey, result: &WriteResult, mode: BackendMode) -> String {
    match mode {
        BackendMode::Dual => format!(
            "Saved {}: file {}, database {}",
            key,
            yes_no(result.file_ok),
            yes_no(result.db_ok)
        ),
        BackendMode::FileOnly => format!(
            "Saved {}: file {} (database not in use)",
            key,
            yes_no(result.file_ok)
        ),
    }
}

/// Report what a delete removed
pub fn format_delete_result(key: &EntryKey, result: &DeleteResult) -> String {
    if !result.removed_any() {
        return format!("Nothing to delete for {}", key);
    }

    let mut removed = Vec::new();
    if result.file_deleted {
        removed.push("file");
    }
    if result.db_deleted {
        removed.push("database");
    }
    format!("Deleted {} from {}", key, removed.join(" and "))
}

/// Whether a typed answer to a yes/no prompt means yes
pub fn confirmation_accepted(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Entry text with a banner line above it
pub fn format_entry(entry: &Entry) -> String {
    let rule = "=".repeat(50);
    let mut output = format!("{}\nDate: {}  (from {})\n", rule, entry.key, entry.source);
    if let Some(updated) = entry.updated_at {
        output.push_str(&format!("Updated: {}\n", updated.format("%Y-%m-%d %H:%M:%S")));
    }
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');
    output
}

fn numbered_keys(output: &mut String, keys: &[EntryKey], with_filename: bool) {
    for (i, key) in keys.iter().enumerate() {
        if with_filename {
            output.push_str(&format!("{:<4}{}  {}\n", i + 1, key, filename_for_key(key)));
        } else {
            output.push_str(&format!("{:<4}{}\n", i + 1, key));
        }
    }
}

/// Both listings, database first. The database section only appears when
/// the session has one.
pub fn format_listing(listing: &Listing, mode: BackendMode) -> String {
    if listing.db_keys.is_empty() && listing.file_keys.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    if mode == BackendMode::Dual {
        output.push_str(&format!("Database entries ({}):\n", listing.db_keys.len()));
        numbered_keys(&mut output, &listing.db_keys, false);
        output.push('\n');
    }
    output.push_str(&format!("File entries ({}):\n", listing.file_keys.len()));
    numbered_keys(&mut output, &listing.file_keys, true);
    output
}

/// Matches grouped by the backend they came from
pub fn format_search_result(term: &str, result: &SearchResult, mode: BackendMode) -> String {
    if result.is_empty() {
        return format!("No entries contain '{}'", term);
    }

    let mut output = String::new();
    if mode == BackendMode::Dual {
        output.push_str(&format!("Database matches ({}):\n", result.db_matches.len()));
        for key in &result.db_matches {
            output.push_str(&format!(" • {}\n", key));
        }
    }
    output.push_str(&format!("File matches ({}):\n", result.file_matches.len()));
    for key in &result.file_matches {
        output.push_str(&format!(" • {}\n", key));
    }
    output
}
