//! Entry file naming and header layout
//!
//! Every entry lives in its own file named `diary_<YYYY-MM-DD>.txt`. The
//! mapping is injective, so a directory listing can be turned back into keys
//! without loss. Files optionally start with a two-line header:
//!
//! ```text
//! Date: 2024-01-15 Time: 21:04:09
//! ------------------------------
//! Had a good day
//! ```

use crate::domain::EntryKey;
use chrono::NaiveTime;

const FILE_PREFIX: &str = "diary_";
const FILE_SUFFIX: &str = ".txt";
const HEADER_PREFIX: &str = "Date: ";
const TIME_LABEL: &str = " Time: ";
const SEPARATOR_WIDTH: usize = 30;

/// Filename for the entry identified by `key`
pub fn filename_for_key(key: &EntryKey) -> String {
    format!("{}{}{}", FILE_PREFIX, key, FILE_SUFFIX)
}

/// Recover the key from a filename produced by [`filename_for_key`].
/// Returns None for files that don't follow the naming convention.
pub fn key_from_filename(filename: &str) -> Option<EntryKey> {
    let stem = filename
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?;
    EntryKey::parse(stem).ok()
}

/// Render the header written above the entry body
pub fn render_header(key: &EntryKey, time: NaiveTime) -> String {
    format!(
        "{}{}{}{}\n{}\n",
        HEADER_PREFIX,
        key,
        TIME_LABEL,
        time.format("%H:%M:%S"),
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// Render full file contents for an entry
pub fn render_file(key: &EntryKey, body: &str, header_time: Option<NaiveTime>) -> String {
    match header_time {
        Some(time) => format!("{}{}\n", render_header(key, time), body),
        None => format!("{}\n", body),
    }
}

/// Whether `line` is exactly the header line [`render_header`] writes for `key`
fn is_header_line(line: &str, key: &EntryKey) -> bool {
    let Some(rest) = line.strip_prefix(HEADER_PREFIX) else {
        return false;
    };
    let Some(time) = rest
        .strip_prefix(key.to_string().as_str())
        .and_then(|rest| rest.strip_prefix(TIME_LABEL))
    else {
        return false;
    };
    time.len() == 8 && NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok()
}

/// Split a stored file into its body, dropping the header when it is the
/// one rendered for `key`. Anything else, including header-like text for
/// another date, is body.
pub fn strip_header<'a>(raw: &'a str, key: &EntryKey) -> &'a str {
    let mut lines = raw.splitn(3, '\n');
    let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
        return raw;
    };

    let separator = second.trim_end_matches('\r');
    let is_header = is_header_line(first.trim_end_matches('\r'), key)
        && separator.len() == SEPARATOR_WIDTH
        && separator.chars().all(|c| c == '-');

    if is_header {
        lines.next().unwrap_or("")
    } else {
        raw
    }
}
