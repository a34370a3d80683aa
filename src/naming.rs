//! Filename rules for dated documents.
//!
//! Canonical shape: `<title>_<yyyymmdd>[letter].pdf`, where the optional
//! lowercase letter tells apart documents from the same day (`a` is implicit,
//! collisions continue at `b`). Two legacy shapes are rewritten into it:
//! - `<title>_<yyyymmdd>_<n>.pdf` -> `<title>_<yyyymmdd><letter n>.pdf`
//! - `<yyyymmdd>_<title>.pdf`     -> `<title>_<yyyymmdd>.pdf`
//!
//! Dates are checked syntactically only (`[12]yyy[01]m[0-3]d`), so e.g. month 19
//! or day 39 pass. The `.pdf` extension is matched case-insensitively and its
//! spelling is kept as found.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::ArchiveError;

/// `<anything>_<yyyymmdd>[a-z].pdf`
static SUFFIX_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<base>.*_(?P<year>[12][0-9]{3})[01][0-9][0-3][0-9])(?P<seq>[a-z]?)\.(?P<ext>(?i:pdf))$",
    )
    .expect("Invalid regex")
});

/// `<title>_<yyyymmdd>_<digits>.pdf`
static NUMERIC_SEQ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<title>.*)_(?P<date>[12][0-9]{3}[01][0-9][0-3][0-9])_(?P<num>[0-9]+)\.(?P<ext>(?i:pdf))$",
    )
    .expect("Invalid regex")
});

/// `<yyyymmdd>_<title>.pdf`
static PREFIX_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date>(?P<year>[12][0-9]{3})[01][0-9][0-3][0-9])_(?P<title>.*)\.(?P<ext>(?i:pdf))$",
    )
    .expect("Invalid regex")
});

/// Highest numeric sequence that still maps to a lowercase letter (`25` -> `z`).
pub const MAX_NUMERIC_SEQUENCE: u32 = 25;

/// Rewrite `name` into the canonical shape.
///
/// Names that are already canonical, or that match no known shape at all, are
/// returned unchanged. A numeric sequence outside `0..=25` is rejected instead
/// of being mapped to a non-letter character.
pub fn normalize_name(name: &str) -> Result<String, ArchiveError> {
    if SUFFIX_DATE.is_match(name) {
        return Ok(name.to_string());
    }

    if let Some(caps) = NUMERIC_SEQ.captures(name) {
        let num = &caps["num"];
        let letter = sequence_letter(num).ok_or_else(|| ArchiveError::SequenceOutOfRange {
            name: name.to_string(),
            value: num.to_string(),
        })?;
        return Ok(format!(
            "{}_{}{}.{}",
            &caps["title"], &caps["date"], letter, &caps["ext"]
        ));
    }

    if let Some(caps) = PREFIX_DATE.captures(name) {
        return Ok(format!("{}_{}.{}", &caps["title"], &caps["date"], &caps["ext"]));
    }

    Ok(name.to_string())
}

/// Map a decimal sequence (`"0"`, `"001"`, ...) to `a..=z`.
fn sequence_letter(digits: &str) -> Option<char> {
    let n: u32 = digits.parse().ok()?;
    if n > MAX_NUMERIC_SEQUENCE {
        return None;
    }
    char::from_u32('a' as u32 + n)
}

/// Four-digit year of a suffix-dated or prefix-dated name.
pub fn extract_year(name: &str) -> Option<String> {
    SUFFIX_DATE
        .captures(name)
        .or_else(|| PREFIX_DATE.captures(name))
        .map(|caps| caps["year"].to_string())
}

/// Next collision candidate for a canonical name: no letter -> `b`, `b` -> `c`, ...
///
/// Returns `None` for names outside the canonical shape and once `z` is reached.
pub fn next_name(name: &str) -> Option<String> {
    let caps = SUFFIX_DATE.captures(name)?;
    let next = match caps["seq"].chars().next() {
        None => 'b',
        Some('z') => return None,
        Some(c) => char::from_u32(c as u32 + 1)?,
    };
    Some(format!("{}{}.{}", &caps["base"], next, &caps["ext"]))
}
