//! Display-string formatting for result cards.

use std::fmt;

use serde::Serialize;

pub const MANUFACTURER_MAX_CHARS: usize = 40;
pub const ELLIPSIS: &str = "...";

pub const UNKNOWN_ERA: &str = "Unknown era";
pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Five-tier collectible rarity derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Map a rarity score onto its tier. Each threshold is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 6.0 {
            Rarity::Legendary
        } else if score >= 5.0 {
            Rarity::Epic
        } else if score >= 4.0 {
            Rarity::Rare
        } else if score >= 3.0 {
            Rarity::Uncommon
        } else {
            Rarity::Common
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// CSS class of the rarity badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Rarity::Common => "rarity-common",
            Rarity::Uncommon => "rarity-uncommon",
            Rarity::Rare => "rarity-rare",
            Rarity::Epic => "rarity-epic",
            Rarity::Legendary => "rarity-legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Shorten a manufacturer name to [`MANUFACTURER_MAX_CHARS`] characters plus
/// an ellipsis. Missing or blank names render as `Unknown`.
pub fn format_manufacturer(manufacturer: Option<&str>) -> String {
    match manufacturer {
        None => UNKNOWN.to_string(),
        Some(m) if m.is_empty() => UNKNOWN.to_string(),
        Some(m) => truncate_chars(m, MANUFACTURER_MAX_CHARS),
    }
}

/// Truncate on character (not byte) boundaries, appending [`ELLIPSIS`] when
/// anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// `value` or `fallback` when missing or empty.
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Format a dollar amount with thousands separators, e.g. `$1,234.50`.
///
/// Whole amounts drop the cents (`$1,250`). Missing and non-finite values
/// render as `N/A`.
pub fn format_currency(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let cents = (v.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };

    if frac == 0 {
        format!("{sign}${whole}")
    } else {
        format!("{sign}${whole}.{frac:02}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
