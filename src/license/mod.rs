//! License expression normalization.
//!
//! Registry license fields are free-form: modern crates use SPDX expressions such as
//! `MIT OR Apache-2.0`, older ones use the legacy `MIT/Apache-2.0` dual-license form,
//! and some carry arbitrary text. Recipes need a flat list of identifiers the build
//! system accepts, so [`normalize`] maps a raw expression to an ordered list of
//! canonical tokens:
//!
//! 1. empty input yields no tokens
//! 2. an `OR` disjunction whose every operand is known yields the operands
//! 3. a `/`-separated list whose every item is known yields the items
//! 4. a single known identifier yields itself
//! 5. anything else yields `custom:<raw>`, passed through verbatim
//!
//! Conjunctions (`AND`), `WITH` exceptions and parenthesized expressions are not
//! parsed; they fall through to the `custom:` form.
//!
//! # Examples
//!
//! ```rust
//! use pkgcrate::license::normalize;
//!
//! assert_eq!(normalize("MIT OR Apache-2.0"), vec!["MIT", "Apache-2.0"]);
//! assert_eq!(normalize("MIT/Apache-2.0"), vec!["MIT", "Apache-2.0"]);
//! assert_eq!(normalize("MIT AND Apache-2.0"), vec!["custom:MIT AND Apache-2.0"]);
//! assert!(normalize("").is_empty());
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::CUSTOM_LICENSE_PREFIX;

/// License identifiers emitted as-is.
///
/// This is data, not a taxonomy: add an entry here to stop a license from being
/// reported as `custom:`. Matching is exact and case-sensitive.
pub const KNOWN_LICENSES: &[&str] = &[
    "0BSD",
    "AGPL-3.0",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "Apache-2.0",
    "Artistic-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "BSL-1.0",
    "CC0-1.0",
    "GPL-2.0",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "ISC",
    "LGPL-2.1",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "MIT",
    "MIT-0",
    "MPL-2.0",
    "Unicode-3.0",
    "Unicode-DFS-2016",
    "Unlicense",
    "WTFPL",
    "Zlib",
];

/// `OR` surrounded by at least one whitespace character on each side, any case.
static DISJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+or\s+").expect("disjunction pattern is a valid regex"));

/// Whether `id` is on the allow-list.
pub fn is_known(id: &str) -> bool {
    KNOWN_LICENSES.contains(&id)
}

/// Normalize a raw registry license expression into canonical tokens.
///
/// Never fails. The result is empty only when `raw` is empty.
pub fn normalize(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    if let Some(ids) = all_known(DISJUNCTION.split(raw)) {
        return ids;
    }

    if let Some(ids) = all_known(raw.split('/')) {
        return ids;
    }

    if is_known(raw) {
        return vec![raw.to_string()];
    }

    vec![format!("{CUSTOM_LICENSE_PREFIX}{raw}")]
}

/// Collect `parts` if every one of them is a known identifier.
///
/// Empty parts are not known, so a stray separator fails the whole split.
fn all_known<'a>(parts: impl Iterator<Item = &'a str>) -> Option<Vec<String>> {
    parts.map(|part| is_known(part).then(|| part.to_string())).collect()
}
